//! Pointer/touch drag state for the globe view.
//!
//! The committed pixel delta survives release, so a new press resumes the
//! rotation from wherever the user left it instead of snapping back to zero.

/// Pixels of horizontal movement per radian of rotation offset.
const POINTER_DIVISOR: f64 = 200.0;
/// Touch drags turn twice as fast per pixel.
const TOUCH_DIVISOR: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    fn divisor(self) -> f64 {
        match self {
            PointerKind::Mouse => POINTER_DIVISOR,
            PointerKind::Touch => TOUCH_DIVISOR,
        }
    }
}

/// Live drag session; exists only while a pointer or finger is down.
#[derive(Clone, Copy, Debug)]
struct Session {
    /// Press X shifted back by the committed movement, so deltas measured
    /// against it continue the previous drag.
    origin_x: f64,
}

#[derive(Debug, Default)]
pub struct DragTracker {
    session: Option<Session>,
    /// Last committed pixel delta; retained across sessions.
    committed_px: f64,
    /// Published rotation offset in radians. Retained while idle.
    offset_rad: f64,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Latest published offset in radians.
    pub fn offset(&self) -> f64 {
        self.offset_rad
    }

    /// Pointer-down / touch-start at the given screen X.
    pub fn press(&mut self, screen_x: f64) {
        self.session = Some(Session {
            origin_x: screen_x - self.committed_px,
        });
    }

    /// Move event while pressed. Stray moves after release are ignored.
    pub fn drag_to(&mut self, screen_x: f64, kind: PointerKind) {
        let Some(session) = self.session else {
            return;
        };
        let delta = screen_x - session.origin_x;
        self.committed_px = delta;
        self.offset_rad = delta / kind.divisor();
    }

    /// Pointer-up, pointer-out or touch end. The committed movement and the
    /// published offset both stay put.
    pub fn release(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_without_movement_keeps_offset() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        drag.drag_to(150.0, PointerKind::Mouse);
        let offset = drag.offset();
        drag.release();

        drag.press(300.0);
        drag.release();
        assert_eq!(drag.offset(), offset);
    }

    #[test]
    fn second_drag_resumes_from_committed_movement() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        drag.drag_to(180.0, PointerKind::Mouse);
        drag.release();
        let offset_after_first = drag.offset();

        // New press at the same screen position: no jump, and further movement
        // accumulates on top of the previous 80 px.
        drag.press(180.0);
        drag.drag_to(180.0, PointerKind::Mouse);
        assert_eq!(drag.offset(), offset_after_first);
        drag.drag_to(200.0, PointerKind::Mouse);
        assert_eq!(drag.offset(), 100.0 / 200.0);
    }

    #[test]
    fn touch_is_twice_as_sensitive_as_pointer() {
        let mut mouse = DragTracker::new();
        mouse.press(0.0);
        mouse.drag_to(60.0, PointerKind::Mouse);

        let mut touch = DragTracker::new();
        touch.press(0.0);
        touch.drag_to(60.0, PointerKind::Touch);

        assert_eq!(touch.offset(), 2.0 * mouse.offset());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut drag = DragTracker::new();
        drag.drag_to(500.0, PointerKind::Mouse);
        assert_eq!(drag.offset(), 0.0);
        assert!(!drag.dragging());
    }

    #[test]
    fn leftward_drag_publishes_negative_offset() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        drag.drag_to(40.0, PointerKind::Mouse);
        assert_eq!(drag.offset(), -60.0 / 200.0);
    }
}
