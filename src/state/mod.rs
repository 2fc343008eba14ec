pub mod album;
pub mod mouse;
pub mod swipe;
pub mod touch;
pub mod view;

pub use album::{Album, AlbumAction};
pub use mouse::MouseDrag;
pub use swipe::{SwipeDirection, SwipeTracker};
pub use touch::{Gesture, PointerEffect, PointerTracker};
pub use view::ViewState;
