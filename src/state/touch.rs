// Multi-pointer tracking for touch mode: one finger pans, two fingers pinch-zoom.
use super::view::clamp_scale;

/// Upper bound on simultaneously tracked pointer ids. Extra ids are dropped.
pub const MAX_TRACKED_POINTERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerSlot {
    id: i32,
    x: f64,
    y: f64,
}

/// Distance between the two fingers and the scale when the pinch started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    pub distance: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Panning,
    Pinching,
    /// Three or more pointers down. Moves are ignored until some are released.
    Crowded,
}

/// What a pointer move should do to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEffect {
    None,
    Pan { dx: f64, dy: f64 },
    Scale(f64),
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct PointerTracker {
    // insertion order matters: the first two slots form the pinch pair
    slots: Vec<PointerSlot>,
    pinch: Option<PinchBaseline>,
}

impl PointerTracker {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn pinch_baseline(&self) -> Option<PinchBaseline> {
        self.pinch
    }

    pub fn gesture(&self) -> Gesture {
        match self.slots.len() {
            0 => Gesture::Idle,
            1 => Gesture::Panning,
            2 => Gesture::Pinching,
            _ => Gesture::Crowded,
        }
    }

    /// Registers a pointer. Returns false when the table is full and the id was dropped.
    /// Reaching exactly two pointers captures a fresh pinch baseline at `current_scale`.
    pub fn down(&mut self, id: i32, x: f64, y: f64, current_scale: f64) -> bool {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
            slot.x = x;
            slot.y = y;
        } else if self.slots.len() < MAX_TRACKED_POINTERS {
            self.slots.push(PointerSlot { id, x, y });
        } else {
            return false;
        }
        if self.slots.len() == 2 {
            self.pinch = Some(PinchBaseline {
                distance: self.pair_distance(),
                scale: current_scale,
            });
        }
        true
    }

    pub fn moved(&mut self, id: i32, x: f64, y: f64) -> PointerEffect {
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
            return PointerEffect::None;
        };
        let (prev_x, prev_y) = (slot.x, slot.y);
        slot.x = x;
        slot.y = y;
        match (self.slots.len(), self.pinch) {
            (1, _) => PointerEffect::Pan {
                dx: x - prev_x,
                dy: y - prev_y,
            },
            (2, Some(base)) => {
                let dist = self.pair_distance();
                let ratio = if base.distance > 0.0 {
                    dist / base.distance
                } else {
                    1.0
                };
                PointerEffect::Scale(pinch_scale(base.scale, ratio))
            }
            _ => PointerEffect::None,
        }
    }

    /// Release or cancel. Returns false for ids that were never tracked.
    pub fn up(&mut self, id: i32) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        if self.slots.len() < 2 {
            self.pinch = None;
        }
        self.slots.len() != before
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.pinch = None;
    }

    fn pair_distance(&self) -> f64 {
        match (self.slots.first(), self.slots.get(1)) {
            (Some(a), Some(b)) => (a.x - b.x).hypot(a.y - b.y),
            _ => 0.0,
        }
    }
}

pub fn pinch_scale(baseline_scale: f64, ratio: f64) -> f64 {
    clamp_scale(baseline_scale * ratio)
}
