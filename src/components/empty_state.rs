use yew::prelude::*;

#[function_component(EmptyState)]
pub fn empty_state() -> Html {
    html! {<div style="flex:1; display:flex; align-items:center; justify-content:center; border:1px dashed #30363d; border-radius:8px; opacity:0.7;">
        {"No photos to show"}
    </div>}
}
