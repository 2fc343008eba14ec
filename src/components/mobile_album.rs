use js_sys::Date;
use std::rc::Rc;
use yew::prelude::*;

use super::{empty_state::EmptyState, viewer::Viewer};
use crate::engine::{InputMode, ViewportEngine};
use crate::model::{Photo, ResolvedLayout};
use crate::state::{Album, AlbumAction, SwipeDirection, SwipeTracker};
use crate::util::page_text;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileAlbumProps {
    pub photos: Rc<Vec<Photo>>,
}

#[function_component(MobileAlbum)]
pub fn mobile_album(props: &MobileAlbumProps) -> Html {
    let album = {
        let photos = props.photos.clone();
        use_reducer(move || Album::new(photos))
    };
    let engine = use_reducer(|| ViewportEngine::new(InputMode::Pointer));
    let swipe = use_mut_ref(SwipeTracker::default);

    let on_prev = {
        let album = album.clone();
        Callback::from(move |_| album.dispatch(AlbumAction::Prev))
    };
    let on_next = {
        let album = album.clone();
        Callback::from(move |_| album.dispatch(AlbumAction::Next))
    };

    let touch_start_cb = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            let touches = e.touches();
            let (x, y) = touches
                .get(0)
                .map(|t| (t.client_x() as f64, t.client_y() as f64))
                .unwrap_or_default();
            swipe
                .borrow_mut()
                .touch_start(touches.length(), x, y, Date::now());
        })
    };
    let touch_end_cb = {
        let swipe = swipe.clone();
        let album = album.clone();
        Callback::from(move |e: TouchEvent| {
            let end = e
                .changed_touches()
                .get(0)
                .map(|t| (t.client_x() as f64, t.client_y() as f64));
            let dir = swipe.borrow_mut().touch_end(end, Date::now());
            match dir {
                Some(SwipeDirection::Prev) => album.dispatch(AlbumAction::Prev),
                Some(SwipeDirection::Next) => album.dispatch(AlbumAction::Next),
                None => {}
            }
        })
    };

    let viewer = match (album.index(), album.current()) {
        (Some(i), Some(photo)) => html! { <Viewer
            image_id={photo.id.clone()}
            src={photo.url.clone()}
            alt={photo.title.clone()}
            page_text={page_text(ResolvedLayout::Mobile, i, album.len(), &photo.title)}
            hint={ResolvedLayout::Mobile.hint()}
            mode={InputMode::Pointer}
            engine={engine.clone()}
            {on_prev}
            {on_next}
        /> },
        _ => html! { <EmptyState /> },
    };

    html! {<div
        style="display:flex; flex-direction:column; gap:8px; flex:1; min-height:0; padding:8px;"
        ontouchstart={touch_start_cb}
        ontouchend={touch_end_cb}
    >
        { viewer }
        <div style="font-size:12px; opacity:0.7; text-align:center;">
            {"Swipe to turn pages · pinch to zoom · rotate with the buttons"}
        </div>
    </div>}
}
