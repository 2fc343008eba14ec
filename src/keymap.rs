// Keyboard shortcuts and button commands for the desktop album
use crate::engine::ViewerAction;

pub const BUTTON_ZOOM_STEP: f64 = 0.2;
pub const ROTATE_STEP_DEG: i32 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Prev,
    Next,
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    Fit,
    Reset,
}

impl Command {
    /// Engine action for view commands, `None` for paging.
    pub fn view_action(self) -> Option<ViewerAction> {
        match self {
            Command::Prev | Command::Next => None,
            Command::ZoomIn => Some(ViewerAction::ZoomBy(BUTTON_ZOOM_STEP)),
            Command::ZoomOut => Some(ViewerAction::ZoomBy(-BUTTON_ZOOM_STEP)),
            Command::RotateLeft => Some(ViewerAction::RotateBy(-ROTATE_STEP_DEG)),
            Command::RotateRight => Some(ViewerAction::RotateBy(ROTATE_STEP_DEG)),
            Command::Fit => Some(ViewerAction::Fit),
            Command::Reset => Some(ViewerAction::Reset),
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Command::Prev => "Previous photo",
            Command::Next => "Next photo",
            Command::ZoomIn => "Zoom in",
            Command::ZoomOut => "Zoom out",
            Command::RotateLeft => "Rotate left 90°",
            Command::RotateRight => "Rotate right 90°",
            Command::Fit => "Fit",
            Command::Reset => "Reset",
        }
    }
}

/// Maps a `KeyboardEvent.key` value to a command. Unknown keys map to nothing.
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" => Some(Command::Prev),
        "ArrowRight" | " " => Some(Command::Next),
        "+" | "=" => Some(Command::ZoomIn),
        "-" | "_" => Some(Command::ZoomOut),
        "[" => Some(Command::RotateLeft),
        "]" | "r" | "R" => Some(Command::RotateRight),
        "0" => Some(Command::Reset),
        "f" | "F" => Some(Command::Fit),
        _ => None,
    }
}

/// Space would otherwise scroll the page.
pub fn suppresses_default(key: &str) -> bool {
    key == " "
}

/// Shortcuts stay quiet while the user is typing.
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_table() {
        assert_eq!(command_for_key("ArrowLeft"), Some(Command::Prev));
        assert_eq!(command_for_key("ArrowRight"), Some(Command::Next));
        assert_eq!(command_for_key(" "), Some(Command::Next));
        assert_eq!(command_for_key("="), Some(Command::ZoomIn));
        assert_eq!(command_for_key("_"), Some(Command::ZoomOut));
        assert_eq!(command_for_key("["), Some(Command::RotateLeft));
        assert_eq!(command_for_key("R"), Some(Command::RotateRight));
        assert_eq!(command_for_key("0"), Some(Command::Reset));
        assert_eq!(command_for_key("f"), Some(Command::Fit));
        assert_eq!(command_for_key("x"), None);
        assert_eq!(command_for_key("Escape"), None);
    }

    #[test]
    fn view_actions() {
        assert_eq!(
            Command::ZoomOut.view_action(),
            Some(ViewerAction::ZoomBy(-0.2))
        );
        assert_eq!(
            Command::RotateLeft.view_action(),
            Some(ViewerAction::RotateBy(-90))
        );
        assert_eq!(Command::Next.view_action(), None);
    }

    #[test]
    fn text_fields_suppress_shortcuts() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("textarea"));
        assert!(!is_text_entry("BODY"));
        assert!(suppresses_default(" "));
        assert!(!suppresses_default("ArrowRight"));
    }
}
