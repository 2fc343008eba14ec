//! Photo album viewer: one photo per page with zoom, rotate and pan driven by
//! mouse, touch or keyboard, in a desktop or mobile layout.

pub mod components;
pub mod engine;
pub mod error;
pub mod keymap;
pub mod model;
pub mod state;
pub mod util;

pub use engine::{InputMode, ViewerAction, ViewportEngine};
pub use error::AlbumError;
