use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, WheelEvent};
use yew::prelude::*;

use super::viewer_controls::ViewerControls;
use crate::engine::{InputMode, ViewerAction, ViewportEngine};
use crate::keymap::Command;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerProps {
    /// Identity of the photo on stage; a change resets the view.
    pub image_id: String,
    pub src: String,
    #[prop_or_default]
    pub alt: String,
    pub page_text: String,
    pub hint: String,
    pub mode: InputMode,
    pub engine: UseReducerHandle<ViewportEngine>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Routes a button or keyboard command to the engine or to paging.
pub fn run_command(
    cmd: Command,
    engine: &UseReducerHandle<ViewportEngine>,
    on_prev: &Callback<()>,
    on_next: &Callback<()>,
) {
    match (cmd, cmd.view_action()) {
        (_, Some(action)) => engine.dispatch(action),
        (Command::Prev, None) => on_prev.emit(()),
        (Command::Next, None) => on_next.emit(()),
        _ => {}
    }
}

#[function_component(Viewer)]
pub fn viewer(props: &ViewerProps) -> Html {
    let stage_ref = use_node_ref();

    {
        let engine = props.engine.clone();
        use_effect_with(props.image_id.clone(), move |id| {
            engine.dispatch(ViewerAction::ShowImage(id.clone()));
            || ()
        });
    }
    {
        let engine = props.engine.clone();
        use_effect_with(props.mode, move |mode| {
            engine.dispatch(ViewerAction::SetMode(*mode));
            || ()
        });
    }
    // Wheel goes on the element directly: it must be non-passive to stop page scroll.
    {
        let engine = props.engine.clone();
        let stage_ref = stage_ref.clone();
        use_effect_with(props.mode, move |mode| {
            let listener = match mode {
                InputMode::Mouse => stage_ref.cast::<Element>().map(|stage| {
                    EventListener::new_with_options(
                        &stage,
                        "wheel",
                        EventListenerOptions::enable_prevent_default(),
                        move |e| {
                            e.prevent_default();
                            if let Some(w) = e.dyn_ref::<WheelEvent>() {
                                engine.dispatch(ViewerAction::Wheel {
                                    delta_y: w.delta_y(),
                                });
                            }
                        },
                    )
                }),
                InputMode::Pointer => None,
            };
            move || drop(listener)
        });
    }

    // Mouse
    let mousedown_cb = {
        let engine = props.engine.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() == 0 {
                engine.dispatch(ViewerAction::MouseDown {
                    x: e.client_x() as f64,
                    y: e.client_y() as f64,
                });
            }
        })
    };
    let mousemove_cb = {
        let engine = props.engine.clone();
        Callback::from(move |e: MouseEvent| {
            engine.dispatch(ViewerAction::MouseMove {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let mouseup_cb = {
        let engine = props.engine.clone();
        Callback::from(move |_: MouseEvent| engine.dispatch(ViewerAction::MouseUp))
    };

    // Pointer (touch mode)
    let pointerdown_cb = {
        let engine = props.engine.clone();
        let stage_ref = stage_ref.clone();
        let mode = props.mode;
        Callback::from(move |e: PointerEvent| {
            if mode != InputMode::Pointer {
                return;
            }
            if let Some(stage) = stage_ref.cast::<Element>() {
                let _ = stage.set_pointer_capture(e.pointer_id());
            }
            engine.dispatch(ViewerAction::PointerDown {
                id: e.pointer_id(),
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let pointermove_cb = {
        let engine = props.engine.clone();
        Callback::from(move |e: PointerEvent| {
            engine.dispatch(ViewerAction::PointerMove {
                id: e.pointer_id(),
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let pointerup_cb = {
        let engine = props.engine.clone();
        Callback::from(move |e: PointerEvent| {
            engine.dispatch(ViewerAction::PointerUp { id: e.pointer_id() });
        })
    };

    let command_cb = {
        let engine = props.engine.clone();
        let on_prev = props.on_prev.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |cmd: Command| run_command(cmd, &engine, &on_prev, &on_next))
    };

    let touch_action = match props.mode {
        InputMode::Pointer => "none",
        InputMode::Mouse => "auto",
    };
    let cursor = if props.engine.is_dragging() { "grabbing" } else { "grab" };
    let stage_style = format!(
        "position:relative; flex:1; min-height:0; overflow:hidden; display:flex; align-items:center; justify-content:center; background:#0e1116; border:1px solid #30363d; border-radius:8px; touch-action:{touch_action}; cursor:{cursor};"
    );
    let photo_style = format!(
        "max-width:100%; max-height:100%; user-select:none; transform:{};",
        props.engine.transform()
    );

    html! {<div style="display:flex; flex-direction:column; gap:8px; flex:1; min-width:0; min-height:0;">
        <div style="display:flex; justify-content:space-between; gap:12px; font-size:13px;">
            <div style="font-weight:600;">{ props.page_text.clone() }</div>
            <div style="opacity:0.7;">{ props.hint.clone() }</div>
        </div>
        <div
            ref={stage_ref}
            style={stage_style}
            onmousedown={mousedown_cb}
            onmousemove={mousemove_cb}
            onmouseup={mouseup_cb.clone()}
            onmouseleave={mouseup_cb}
            onpointerdown={pointerdown_cb}
            onpointermove={pointermove_cb}
            onpointerup={pointerup_cb.clone()}
            onpointercancel={pointerup_cb}
        >
            <img src={props.src.clone()} alt={props.alt.clone()} draggable="false" style={photo_style} />
        </div>
        <ViewerControls on_command={command_cb} />
    </div>}
}
