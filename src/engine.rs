//! Viewport transform engine.
//!
//! Owns the [`ViewState`] of the photo on stage and folds three input channels into it:
//! pointer tracking (touch mode), mouse drag and wheel (mouse mode), and imperative
//! commands from buttons or the keyboard. The engine never touches the DOM; callers
//! translate browser events into [`ViewerAction`]s.

use std::rc::Rc;
use yew::Reducible;

use crate::state::mouse::wheel_zoom_delta;
use crate::state::{Gesture, MouseDrag, PointerEffect, PointerTracker, ViewState};
use crate::util::cwarn;

/// Which input channel drives the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Pointer events: one-finger pan, two-finger pinch.
    Pointer,
    /// Mouse drag and wheel.
    Mouse,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerAction {
    ZoomBy(f64),
    RotateBy(i32),
    Reset,
    Fit,
    /// Image identity on stage. A new identity resets the view.
    ShowImage(String),
    SetMode(InputMode),
    PointerDown { id: i32, x: f64, y: f64 },
    PointerMove { id: i32, x: f64, y: f64 },
    /// Release or cancel.
    PointerUp { id: i32 },
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    /// Button release or leaving the stage.
    MouseUp,
    Wheel { delta_y: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportEngine {
    view: ViewState,
    mode: InputMode,
    image: Option<String>,
    pointers: PointerTracker,
    drag: MouseDrag,
}

impl ViewportEngine {
    pub fn new(mode: InputMode) -> Self {
        Self {
            view: ViewState::default(),
            mode,
            image: None,
            pointers: PointerTracker::default(),
            drag: MouseDrag::default(),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn gesture(&self) -> Gesture {
        self.pointers.gesture()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn transform(&self) -> String {
        self.view.transform_css()
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.view.zoom_by(delta);
    }

    pub fn rotate_by(&mut self, degrees: i32) {
        self.view.rotate_by(degrees);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    pub fn fit_to_screen(&mut self) {
        self.view.fit();
    }

    /// Returns true when the identity changed and the view was reset.
    pub fn show_image(&mut self, id: &str) -> bool {
        if self.image.as_deref() == Some(id) {
            return false;
        }
        self.image = Some(id.to_owned());
        self.reset_view();
        true
    }

    /// Switching channels drops any gesture in flight on the old one.
    pub fn set_mode(&mut self, mode: InputMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.pointers.clear();
        self.drag.end();
        true
    }

    pub fn pointer_down(&mut self, id: i32, x: f64, y: f64) -> bool {
        if self.mode != InputMode::Pointer {
            return false;
        }
        let tracked = self.pointers.down(id, x, y, self.view.scale);
        if !tracked {
            cwarn(&format!("pointer table full, ignoring pointer {id}"));
        }
        tracked
    }

    pub fn pointer_move(&mut self, id: i32, x: f64, y: f64) -> bool {
        if self.mode != InputMode::Pointer {
            return false;
        }
        match self.pointers.moved(id, x, y) {
            PointerEffect::None => false,
            PointerEffect::Pan { dx, dy } => {
                self.view.pan_by(dx, dy);
                true
            }
            PointerEffect::Scale(scale) => {
                self.view.set_scale(scale);
                true
            }
        }
    }

    pub fn pointer_up(&mut self, id: i32) -> bool {
        if self.mode != InputMode::Pointer {
            return false;
        }
        self.pointers.up(id)
    }

    pub fn mouse_down(&mut self, x: f64, y: f64) -> bool {
        if self.mode != InputMode::Mouse {
            return false;
        }
        self.drag.begin(x, y, self.view.tx, self.view.ty);
        true
    }

    pub fn mouse_move(&mut self, x: f64, y: f64) -> bool {
        if self.mode != InputMode::Mouse {
            return false;
        }
        match self.drag.update(x, y) {
            Some((tx, ty)) => {
                self.view.set_translate(tx, ty);
                true
            }
            None => false,
        }
    }

    pub fn mouse_up(&mut self) -> bool {
        if self.mode != InputMode::Mouse || !self.drag.is_dragging() {
            return false;
        }
        self.drag.end();
        true
    }

    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if self.mode != InputMode::Mouse {
            return false;
        }
        match wheel_zoom_delta(delta_y) {
            Some(delta) => {
                self.zoom_by(delta);
                true
            }
            None => false,
        }
    }

    /// Applies one action. Returns false when the action was ignored and nothing changed.
    pub fn apply(&mut self, action: ViewerAction) -> bool {
        match action {
            ViewerAction::ZoomBy(delta) => {
                self.zoom_by(delta);
                true
            }
            ViewerAction::RotateBy(degrees) => {
                self.rotate_by(degrees);
                true
            }
            ViewerAction::Reset => {
                self.reset_view();
                true
            }
            ViewerAction::Fit => {
                self.fit_to_screen();
                true
            }
            ViewerAction::ShowImage(id) => self.show_image(&id),
            ViewerAction::SetMode(mode) => self.set_mode(mode),
            ViewerAction::PointerDown { id, x, y } => self.pointer_down(id, x, y),
            ViewerAction::PointerMove { id, x, y } => self.pointer_move(id, x, y),
            ViewerAction::PointerUp { id } => self.pointer_up(id),
            ViewerAction::MouseDown { x, y } => self.mouse_down(x, y),
            ViewerAction::MouseMove { x, y } => self.mouse_move(x, y),
            ViewerAction::MouseUp => self.mouse_up(),
            ViewerAction::Wheel { delta_y } => self.wheel(delta_y),
        }
    }
}

impl Reducible for ViewportEngine {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) && next != *self {
            Rc::new(next)
        } else {
            self
        }
    }
}
