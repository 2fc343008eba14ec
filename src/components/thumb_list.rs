use yew::prelude::*;

use crate::model::Photo;

#[derive(Properties, PartialEq, Clone)]
pub struct ThumbListProps {
    pub photos: Vec<Photo>,
    pub active: Option<usize>,
    pub on_select: Callback<usize>,
}

#[function_component(ThumbList)]
pub fn thumb_list(props: &ThumbListProps) -> Html {
    html! {<div style="display:flex; flex-direction:column; gap:6px; overflow-y:auto; min-height:0;">
        { for props.photos.iter().enumerate().map(|(i, p)| {
            let cb = props.on_select.clone();
            let onclick = Callback::from(move |_| cb.emit(i));
            let border = if props.active == Some(i) { "#58a6ff" } else { "#30363d" };
            html! {
                <button key={p.id.clone()} title={p.title.clone()} {onclick}
                    style={format!("display:flex; gap:8px; align-items:center; text-align:left; background:#161b22; border:1px solid {border}; border-radius:6px; padding:4px;")}>
                    <img src={p.url.clone()} alt="" style="width:56px; height:40px; object-fit:cover; border-radius:4px;" />
                    <span style="font-size:12px;">{ format!("{}. {}", i + 1, p.title) }</span>
                </button>
            }
        }) }
    </div>}
}
