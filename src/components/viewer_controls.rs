use yew::prelude::*;

use crate::keymap::Command;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerControlsProps {
    pub on_command: Callback<Command>,
}

const BUTTONS: [(Command, &str); 8] = [
    (Command::Prev, "← Prev"),
    (Command::ZoomOut, "−"),
    (Command::ZoomIn, "+"),
    (Command::RotateLeft, "⤺"),
    (Command::RotateRight, "⤻"),
    (Command::Fit, "Fit"),
    (Command::Reset, "Reset"),
    (Command::Next, "Next →"),
];

#[function_component(ViewerControls)]
pub fn viewer_controls(props: &ViewerControlsProps) -> Html {
    html! {<div style="display:flex; flex-wrap:wrap; gap:6px; justify-content:center; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
        { for BUTTONS.iter().map(|(cmd, label)| {
            let cmd = *cmd;
            let cb = props.on_command.clone();
            let onclick = Callback::from(move |_| cb.emit(cmd));
            html! { <button title={cmd.tooltip()} {onclick}>{ *label }</button> }
        }) }
    </div>}
}
