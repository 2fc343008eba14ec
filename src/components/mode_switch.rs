use yew::prelude::*;

use crate::model::LayoutMode;

#[derive(Properties, PartialEq, Clone)]
pub struct ModeSwitchProps {
    pub active: LayoutMode,
    pub on_select: Callback<LayoutMode>,
}

#[function_component(ModeSwitch)]
pub fn mode_switch(props: &ModeSwitchProps) -> Html {
    html! {<div style="display:flex; gap:6px;">
        { for LayoutMode::ALL.iter().map(|mode| {
            let mode = *mode;
            let cb = props.on_select.clone();
            let onclick = Callback::from(move |_| cb.emit(mode));
            let style = if props.active == mode {
                "background:#1f6feb; border:1px solid #58a6ff; color:#fff;"
            } else {
                ""
            };
            html! { <button {style} {onclick}>{ mode.label() }</button> }
        }) }
    </div>}
}
