// View transform state for the displayed photo

pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 6.0;

pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Scale, quarter-turn rotation and screen-space translation of one photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    /// Degrees, always one of 0, 90, 180, 270 when driven through `rotate_by`.
    pub rotation: i32,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl ViewState {
    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = clamp_scale(self.scale + delta);
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    pub fn rotate_by(&mut self, degrees: i32) {
        self.rotation = (self.rotation + degrees).rem_euclid(360);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }

    pub fn set_translate(&mut self, tx: f64, ty: f64) {
        self.tx = tx;
        self.ty = ty;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Back to unit scale and centered, keeping the current rotation.
    /// Does not look at the image size.
    pub fn fit(&mut self) {
        self.scale = 1.0;
        self.tx = 0.0;
        self.ty = 0.0;
    }

    /// CSS transform, translate outermost so panning stays in screen space.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.tx,
            self.ty,
            self.rotation,
            clamp_scale(self.scale)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_saturates_at_both_bounds() {
        let mut v = ViewState::default();
        for _ in 0..100 {
            v.zoom_by(0.7);
        }
        assert_eq!(v.scale, MAX_SCALE);
        for _ in 0..100 {
            v.zoom_by(-0.3);
        }
        assert_eq!(v.scale, MIN_SCALE);
        v.zoom_by(-50.0);
        assert_eq!(v.scale, MIN_SCALE);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let mut v = ViewState::default();
        for _ in 0..4 {
            v.rotate_by(90);
        }
        assert_eq!(v.rotation, 0);
        v.rotate_by(-90);
        assert_eq!(v.rotation, 270);
        v.rotate_by(-810);
        assert_eq!(v.rotation, 180);
    }

    #[test]
    fn fit_keeps_rotation_reset_does_not() {
        let mut v = ViewState::default();
        v.zoom_by(1.5);
        v.rotate_by(90);
        v.pan_by(40.0, -12.5);
        v.fit();
        assert_eq!(
            v,
            ViewState {
                scale: 1.0,
                rotation: 90,
                tx: 0.0,
                ty: 0.0
            }
        );
        v.reset();
        assert_eq!(v, ViewState::default());
    }

    #[test]
    fn transform_is_translate_rotate_scale() {
        let mut v = ViewState::default();
        assert_eq!(
            v.transform_css(),
            "translate(0px, 0px) rotate(0deg) scale(1)"
        );
        v.set_translate(12.5, -3.0);
        v.rotate_by(270);
        v.set_scale(2.0);
        assert_eq!(
            v.transform_css(),
            "translate(12.5px, -3px) rotate(270deg) scale(2)"
        );
    }
}
