use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use super::{
    empty_state::EmptyState,
    shortcut_panel::ShortcutPanel,
    thumb_list::ThumbList,
    viewer::{run_command, Viewer},
};
use crate::engine::{InputMode, ViewportEngine};
use crate::keymap::{command_for_key, is_text_entry, suppresses_default};
use crate::model::{Photo, ResolvedLayout};
use crate::state::{Album, AlbumAction};
use crate::util::page_text;

#[derive(Properties, PartialEq, Clone)]
pub struct DesktopAlbumProps {
    pub photos: Rc<Vec<Photo>>,
}

#[function_component(DesktopAlbum)]
pub fn desktop_album(props: &DesktopAlbumProps) -> Html {
    let album = {
        let photos = props.photos.clone();
        use_reducer(move || Album::new(photos))
    };
    let engine = use_reducer(|| ViewportEngine::new(InputMode::Mouse));

    let on_prev = {
        let album = album.clone();
        Callback::from(move |_| album.dispatch(AlbumAction::Prev))
    };
    let on_next = {
        let album = album.clone();
        Callback::from(move |_| album.dispatch(AlbumAction::Next))
    };
    let on_select = {
        let album = album.clone();
        Callback::from(move |i: usize| album.dispatch(AlbumAction::Select(i)))
    };

    // Keyboard shortcuts
    {
        let engine = engine.clone();
        let on_prev = on_prev.clone();
        let on_next = on_next.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new_with_options(
                    &win,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |e| {
                        let Some(ke) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let tag = ke
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .map(|el| el.tag_name())
                            .unwrap_or_default();
                        if is_text_entry(&tag) {
                            return;
                        }
                        let key = ke.key();
                        let Some(cmd) = command_for_key(&key) else {
                            return;
                        };
                        if suppresses_default(&key) {
                            ke.prevent_default();
                        }
                        run_command(cmd, &engine, &on_prev, &on_next);
                    },
                )
            });
            move || drop(listener)
        });
    }

    let viewer = match (album.index(), album.current()) {
        (Some(i), Some(photo)) => html! { <Viewer
            image_id={photo.id.clone()}
            src={photo.url.clone()}
            alt={photo.title.clone()}
            page_text={page_text(ResolvedLayout::Desktop, i, album.len(), &photo.title)}
            hint={ResolvedLayout::Desktop.hint()}
            mode={InputMode::Mouse}
            engine={engine.clone()}
            on_prev={on_prev.clone()}
            on_next={on_next.clone()}
        /> },
        _ => html! { <EmptyState /> },
    };

    html! {<div style="display:flex; gap:12px; flex:1; min-height:0; padding:12px;">
        <div style="width:240px; flex:0 0 auto; display:flex; flex-direction:column; gap:14px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px; min-height:0;">
            <ShortcutPanel />
            <div style="font-weight:600;">{"Photos"}</div>
            <ThumbList photos={album.photos().to_vec()} active={album.index()} {on_select} />
        </div>
        { viewer }
    </div>}
}
