//! Frame-loop bookkeeping shared between the render callback and unmount.
//!
//! The browser may already have a frame queued when the component unmounts;
//! the disposed flag turns that stale callback into a no-op, and the pending
//! id is handed back so the caller can cancel it.

#[derive(Debug, Default)]
pub struct FrameLoop {
    disposed: bool,
    pending: Option<i32>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the component is alive. A callback firing after disposal
    /// must check this first and do nothing.
    pub fn running(&self) -> bool {
        !self.disposed
    }

    /// Record the id of the next scheduled callback. Ignored once disposed.
    pub fn schedule(&mut self, id: i32) {
        if !self.disposed {
            self.pending = Some(id);
        }
    }

    /// Mark the loop disposed and hand back the pending callback id so the
    /// caller can cancel it. Idempotent.
    pub fn dispose(&mut self) -> Option<i32> {
        self.disposed = true;
        self.pending.take()
    }
}
