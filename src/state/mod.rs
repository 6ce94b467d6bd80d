pub mod drag;
pub mod frame_loop;
pub mod rotation;
pub mod surface;

pub use drag::{DragTracker, PointerKind};
pub use frame_loop::FrameLoop;
pub use rotation::Rotation;
pub use surface::Surface;
