// Mouse drag and wheel handling for desktop mode

pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Scroll down zooms out, scroll up zooms in. Zero delta is not a tick.
pub fn wheel_zoom_delta(delta_y: f64) -> Option<f64> {
    if delta_y > 0.0 {
        Some(-WHEEL_ZOOM_STEP)
    } else if delta_y < 0.0 {
        Some(WHEEL_ZOOM_STEP)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBaseline {
    pub origin_x: f64,
    pub origin_y: f64,
    pub start_tx: f64,
    pub start_ty: f64,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct MouseDrag {
    baseline: Option<DragBaseline>,
}

impl MouseDrag {
    pub fn begin(&mut self, x: f64, y: f64, tx: f64, ty: f64) {
        self.baseline = Some(DragBaseline {
            origin_x: x,
            origin_y: y,
            start_tx: tx,
            start_ty: ty,
        });
    }

    /// Absolute translate for the current pointer position, if a drag is active.
    pub fn update(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.baseline
            .map(|b| (b.start_tx + (x - b.origin_x), b.start_ty + (y - b.origin_y)))
    }

    pub fn end(&mut self) {
        self.baseline = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.baseline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_direction() {
        assert_eq!(wheel_zoom_delta(120.0), Some(-WHEEL_ZOOM_STEP));
        assert_eq!(wheel_zoom_delta(-3.0), Some(WHEEL_ZOOM_STEP));
        assert_eq!(wheel_zoom_delta(0.0), None);
    }

    #[test]
    fn drag_is_relative_to_baseline() {
        let mut d = MouseDrag::default();
        assert_eq!(d.update(10.0, 10.0), None);
        d.begin(100.0, 100.0, 20.0, -5.0);
        assert_eq!(d.update(130.0, 90.0), Some((50.0, -15.0)));
        // not cumulative: a second move is measured from the same origin
        assert_eq!(d.update(101.0, 100.0), Some((21.0, -5.0)));
        d.end();
        assert!(!d.is_dragging());
        assert_eq!(d.update(500.0, 500.0), None);
    }
}
