// Logging and small formatting helpers
use crate::model::ResolvedLayout;

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::warn!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Caption above the stage, e.g. "Desktop · 2 / 8 · Ridge line".
pub fn page_text(layout: ResolvedLayout, index: usize, len: usize, title: &str) -> String {
    format!("{} · {} / {} · {}", layout.label(), index + 1, len, title)
}
