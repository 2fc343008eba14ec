use gloo::events::EventListener;
use yew::prelude::*;

use super::{desktop_album::DesktopAlbum, mobile_album::MobileAlbum, mode_switch::ModeSwitch};
use crate::model::{load_catalog, LayoutMode, ResolvedLayout};
use crate::util::{clog, cwarn};

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

fn initial_mode() -> LayoutMode {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| LayoutMode::from_path(&p))
        .unwrap_or(LayoutMode::Auto)
}

#[function_component(App)]
pub fn app() -> Html {
    let photos = use_memo((), |_| match load_catalog() {
        Ok(photos) => photos,
        Err(err) => {
            cwarn(&format!("photo catalog unavailable: {err}"));
            Vec::new()
        }
    });
    let mode = use_state(initial_mode);
    let width = use_state(viewport_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .map(|win| EventListener::new(&win, "resize", move |_| width.set(viewport_width())));
            move || drop(listener)
        });
    }

    let layout = mode.resolve(*width);
    {
        let mode = *mode;
        use_effect_with(layout, move |layout| {
            clog(&format!("layout: {} ({})", layout.label(), mode.label()));
            || ()
        });
    }

    let on_select_mode = {
        let mode = mode.clone();
        Callback::from(move |m: LayoutMode| mode.set(m))
    };

    let content = match layout {
        ResolvedLayout::Mobile => html! { <MobileAlbum photos={photos.clone()} /> },
        ResolvedLayout::Desktop => html! { <DesktopAlbum photos={photos.clone()} /> },
    };

    html! {<div style="display:flex; flex-direction:column; width:100vw; height:100vh; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
        <div id="top-bar" style="display:flex; justify-content:space-between; align-items:center; padding:8px 12px; border-bottom:1px solid #30363d;">
            <div>
                <div style="font-weight:600; font-size:16px;">{"Photo Album"}</div>
                <div style="font-size:11px; opacity:0.7;">{"One photo per page · zoom · rotate · shortcuts"}</div>
            </div>
            <ModeSwitch active={*mode} on_select={on_select_mode} />
        </div>
        { content }
    </div>}
}
