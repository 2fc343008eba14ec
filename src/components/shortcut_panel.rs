use yew::prelude::*;

const ROWS: [(&str, &str); 5] = [
    ("← / →", "Previous / next photo"),
    ("+ / -", "Zoom in / out"),
    ("[ / ] / R", "Rotate left / right"),
    ("F / 0", "Fit / reset"),
    ("Space", "Next photo"),
];

#[function_component(ShortcutPanel)]
pub fn shortcut_panel() -> Html {
    html! {<div style="display:flex; flex-direction:column; gap:4px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Shortcuts"}</div>
        { for ROWS.iter().map(|(keys, what)| html! {
            <div style="font-size:12px; display:flex; gap:8px;">
                <kbd style="min-width:64px; color:#58a6ff;">{ *keys }</kbd>
                <span style="opacity:0.8;">{ *what }</span>
            </div>
        }) }
    </div>}
}
