// Horizontal swipe recognition for the mobile album

pub const SWIPE_MIN_DISTANCE_PX: f64 = 60.0;
pub const SWIPE_MAX_DURATION_MS: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved rightward.
    Prev,
    /// Finger moved leftward.
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SwipeStart {
    x: f64,
    y: f64,
    at_ms: f64,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    start: Option<SwipeStart>,
}

impl SwipeTracker {
    /// Arms on a single-finger start. Any multi-finger start disarms, so a pinch never pages.
    pub fn touch_start(&mut self, touch_count: u32, x: f64, y: f64, now_ms: f64) {
        self.start = if touch_count == 1 {
            Some(SwipeStart { x, y, at_ms: now_ms })
        } else {
            None
        };
    }

    /// Consumes the armed start. `end` is the changed touch position, if the event carried one.
    pub fn touch_end(&mut self, end: Option<(f64, f64)>, now_ms: f64) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let (x, y) = end?;
        classify_swipe(x - start.x, y - start.y, now_ms - start.at_ms)
    }

    pub fn is_armed(&self) -> bool {
        self.start.is_some()
    }
}

pub fn classify_swipe(dx: f64, dy: f64, elapsed_ms: f64) -> Option<SwipeDirection> {
    if dx.abs() > dy.abs() && dx.abs() > SWIPE_MIN_DISTANCE_PX && elapsed_ms < SWIPE_MAX_DURATION_MS
    {
        Some(if dx > 0.0 {
            SwipeDirection::Prev
        } else {
            SwipeDirection::Next
        })
    } else {
        None
    }
}
