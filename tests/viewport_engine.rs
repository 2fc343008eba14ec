use std::rc::Rc;

use yew::Reducible;
use yew_photo_album::keymap::{command_for_key, Command};
use yew_photo_album::state::view::{MAX_SCALE, MIN_SCALE};
use yew_photo_album::state::{Gesture, ViewState};
use yew_photo_album::{InputMode, ViewerAction, ViewportEngine};

fn run(engine: ViewportEngine, actions: Vec<ViewerAction>) -> Rc<ViewportEngine> {
    actions
        .into_iter()
        .fold(Rc::new(engine), |e, action| e.reduce(action))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "expected {expected} got {actual}"
    );
}

#[test]
fn mouse_drag_and_wheel() {
    let e = run(
        ViewportEngine::new(InputMode::Mouse),
        vec![
            ViewerAction::ShowImage("harbor".into()),
            ViewerAction::MouseDown { x: 200.0, y: 150.0 },
            ViewerAction::MouseMove { x: 260.0, y: 120.0 },
            ViewerAction::MouseMove { x: 250.0, y: 170.0 },
            ViewerAction::MouseUp,
            // no button held: ignored
            ViewerAction::MouseMove { x: 0.0, y: 0.0 },
            ViewerAction::Wheel { delta_y: -100.0 },
            ViewerAction::Wheel { delta_y: -100.0 },
            ViewerAction::Wheel { delta_y: 100.0 },
        ],
    );
    let v = e.view();
    assert_eq!((v.tx, v.ty), (50.0, 20.0));
    assert_close(v.scale, 1.1);
    assert!(!e.is_dragging());
}

#[test]
fn second_drag_starts_from_current_translate() {
    let e = run(
        ViewportEngine::new(InputMode::Mouse),
        vec![
            ViewerAction::MouseDown { x: 0.0, y: 0.0 },
            ViewerAction::MouseMove { x: 10.0, y: 10.0 },
            ViewerAction::MouseUp,
            ViewerAction::MouseDown { x: 100.0, y: 100.0 },
            ViewerAction::MouseMove { x: 95.0, y: 130.0 },
        ],
    );
    assert_eq!((e.view().tx, e.view().ty), (5.0, 40.0));
    assert!(e.is_dragging());
}

#[test]
fn pinch_then_pan_with_remaining_finger() {
    let e = run(
        ViewportEngine::new(InputMode::Pointer),
        vec![
            ViewerAction::PointerDown { id: 1, x: 100.0, y: 100.0 },
            ViewerAction::PointerMove { id: 1, x: 110.0, y: 100.0 },
            ViewerAction::PointerDown { id: 2, x: 210.0, y: 100.0 },
            ViewerAction::PointerMove { id: 2, x: 310.0, y: 100.0 },
        ],
    );
    assert_eq!(e.gesture(), Gesture::Pinching);
    assert_close(e.view().scale, 2.0);
    assert_eq!((e.view().tx, e.view().ty), (10.0, 0.0));

    let e = run(
        (*e).clone(),
        vec![
            ViewerAction::PointerUp { id: 1 },
            ViewerAction::PointerMove { id: 2, x: 315.0, y: 90.0 },
        ],
    );
    assert_eq!(e.gesture(), Gesture::Panning);
    assert_close(e.view().scale, 2.0);
    assert_eq!((e.view().tx, e.view().ty), (15.0, -10.0));
}

#[test]
fn pinch_is_relative_to_scale_at_start() {
    let e = run(
        ViewportEngine::new(InputMode::Pointer),
        vec![
            ViewerAction::ZoomBy(0.5),
            ViewerAction::PointerDown { id: 4, x: 0.0, y: 0.0 },
            ViewerAction::PointerDown { id: 9, x: 0.0, y: 200.0 },
            ViewerAction::PointerMove { id: 9, x: 0.0, y: 100.0 },
        ],
    );
    assert_close(e.view().scale, 0.75);

    let e = e.reduce(ViewerAction::PointerMove { id: 9, x: 0.0, y: 10.0 });
    assert_eq!(e.view().scale, MIN_SCALE);
    let e = e.reduce(ViewerAction::PointerMove { id: 9, x: 0.0, y: 5_000.0 });
    assert_eq!(e.view().scale, MAX_SCALE);
    assert_eq!(e.view().rotation, 0);
}

#[test]
fn cancel_clears_pinch() {
    let e = run(
        ViewportEngine::new(InputMode::Pointer),
        vec![
            ViewerAction::PointerDown { id: 1, x: 0.0, y: 0.0 },
            ViewerAction::PointerDown { id: 2, x: 100.0, y: 0.0 },
            ViewerAction::PointerUp { id: 2 },
            ViewerAction::PointerUp { id: 1 },
            ViewerAction::PointerMove { id: 1, x: 50.0, y: 50.0 },
        ],
    );
    assert_eq!(e.gesture(), Gesture::Idle);
    assert_eq!(e.view(), ViewState::default());
}

#[test]
fn zoom_stays_in_range_for_any_sequence() {
    let deltas = [0.2, 3.0, -0.1, 5.5, -12.0, 0.05, 0.2, -0.2, 9.9, -0.01];
    let mut e = ViewportEngine::new(InputMode::Mouse);
    for (i, d) in deltas.iter().cycle().take(200).enumerate() {
        e.zoom_by(*d * if i % 3 == 0 { -1.0 } else { 1.0 });
        let s = e.view().scale;
        assert!((MIN_SCALE..=MAX_SCALE).contains(&s), "scale {s} out of range");
    }
}

#[test]
fn rotation_cycles_back() {
    for d in [90, -90, 180, 270, -450, 720] {
        let mut e = ViewportEngine::new(InputMode::Mouse);
        e.rotate_by(90);
        for _ in 0..4 {
            e.rotate_by(d);
        }
        assert_eq!(e.view().rotation, 90, "step {d}");
    }
}

#[test]
fn reset_fit_and_image_change() {
    let mut e = ViewportEngine::new(InputMode::Mouse);
    e.show_image("ridge");
    e.zoom_by(2.0);
    e.rotate_by(-90);
    e.mouse_down(0.0, 0.0);
    e.mouse_move(-40.0, 25.0);
    e.mouse_up();

    let mut fitted = e.clone();
    fitted.fit_to_screen();
    assert_eq!(
        fitted.view(),
        ViewState {
            scale: 1.0,
            rotation: 270,
            tx: 0.0,
            ty: 0.0
        }
    );

    let mut reset = e.clone();
    reset.reset_view();
    assert_eq!(reset.view(), ViewState::default());

    assert!(e.show_image("canyon"));
    assert_eq!(e.view(), ViewState::default());
    assert_eq!(e.image(), Some("canyon"));
    assert_eq!(e.transform(), "translate(0px, 0px) rotate(0deg) scale(1)");
}

#[test]
fn keyboard_commands_drive_the_engine() {
    let actions: Vec<ViewerAction> = ["+", "+", "]", "r", "[", "x", "ArrowRight"]
        .iter()
        .filter_map(|k| command_for_key(k))
        .filter_map(Command::view_action)
        .collect();
    let e = run(ViewportEngine::new(InputMode::Mouse), actions);
    assert_close(e.view().scale, 1.4);
    assert_eq!(e.view().rotation, 90);

    let e = e.reduce(command_for_key("f").and_then(Command::view_action).expect("fit"));
    assert_eq!(e.view().scale, 1.0);
    assert_eq!(e.view().rotation, 90);
    let e = e.reduce(command_for_key("0").and_then(Command::view_action).expect("reset"));
    assert_eq!(e.view(), ViewState::default());
}
