pub mod app;
pub mod desktop_album;
pub mod empty_state;
pub mod mobile_album;
pub mod mode_switch;
pub mod shortcut_panel;
pub mod thumb_list;
pub mod viewer;
pub mod viewer_controls;

pub use app::App;
