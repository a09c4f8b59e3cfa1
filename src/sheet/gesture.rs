//! Gesture-driven state transitions
//!
//! Decides which `PanelState` a sheet moves to when a drag ends. Velocity
//! wins over distance; every gesture moves at most one level.

use serde::{Deserialize, Serialize};

use super::state::PanelState;

/// Default fling speed above which velocity decides the transition (px/s)
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 500.0;

/// Default fraction of the current height a drag must cover
pub const DEFAULT_DRAG_RATIO: f32 = 0.3;

/// Default drag distance used when the current height is unknown (px)
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 100.0;

/// Net displacement and velocity of a completed drag
///
/// Positive values point downward (the closing direction).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub offset_y: f32,
    pub velocity_y: f32,
}

impl GestureSample {
    pub fn new(offset_y: f32, velocity_y: f32) -> Self {
        Self {
            offset_y,
            velocity_y,
        }
    }

    /// Both components are usable numbers
    pub fn is_finite(&self) -> bool {
        self.offset_y.is_finite() && self.velocity_y.is_finite()
    }
}

/// Tunable thresholds for gesture decisions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionThresholds {
    /// Speed above which the fling direction decides (px/s)
    pub velocity_px_per_s: f32,
    /// Fraction of the current state's height a slow drag must cover
    pub drag_ratio: f32,
    /// Drag distance required when the current height is zero or unknown
    pub distance_px: f32,
}

impl Default for TransitionThresholds {
    fn default() -> Self {
        Self {
            velocity_px_per_s: DEFAULT_VELOCITY_THRESHOLD,
            drag_ratio: DEFAULT_DRAG_RATIO,
            distance_px: DEFAULT_DISTANCE_THRESHOLD,
        }
    }
}

impl TransitionThresholds {
    /// Replace any non-finite or non-positive threshold with its default
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            velocity_px_per_s: pick(self.velocity_px_per_s, defaults.velocity_px_per_s),
            drag_ratio: pick(self.drag_ratio, defaults.drag_ratio),
            distance_px: pick(self.distance_px, defaults.distance_px),
        }
    }
}

/// Direction a gesture asks the sheet to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
    Stay,
}

/// Pure decision function over `PanelState`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureStateMachine {
    pub thresholds: TransitionThresholds,
}

impl GestureStateMachine {
    pub fn new(thresholds: TransitionThresholds) -> Self {
        Self {
            thresholds: thresholds.sanitized(),
        }
    }

    /// Override the fallback drag distance
    pub fn with_distance_threshold(mut self, distance_px: f32) -> Self {
        self.thresholds.distance_px = distance_px;
        self.thresholds = self.thresholds.sanitized();
        self
    }

    /// Next state for a completed drag
    ///
    /// `current_height` is the pixel height of `current` as laid out. When it
    /// is missing or zero (a minimized sheet), the drag must instead travel
    /// `distance_px`.
    pub fn decide(
        &self,
        current: PanelState,
        sample: GestureSample,
        current_height: Option<f32>,
    ) -> PanelState {
        if current == PanelState::Hidden || !sample.is_finite() {
            return current;
        }

        let next = match self.step_for(sample, current_height) {
            Step::Up => current.step_up(),
            Step::Down => current.step_down(),
            Step::Stay => current,
        };

        if next != current {
            tracing::debug!(
                target: "sheet::gesture",
                from = %current,
                to = %next,
                offset_y = sample.offset_y,
                velocity_y = sample.velocity_y,
                "gesture transition"
            );
        }
        next
    }

    fn step_for(&self, sample: GestureSample, current_height: Option<f32>) -> Step {
        let t = &self.thresholds;

        if sample.velocity_y.abs() > t.velocity_px_per_s {
            return if sample.velocity_y > 0.0 {
                Step::Down
            } else {
                Step::Up
            };
        }

        match current_height.filter(|h| h.is_finite() && *h > 0.0) {
            Some(height) => {
                let ratio = sample.offset_y / height;
                if ratio > t.drag_ratio {
                    Step::Down
                } else if ratio < -t.drag_ratio {
                    Step::Up
                } else {
                    Step::Stay
                }
            }
            None => {
                if sample.offset_y > t.distance_px {
                    Step::Down
                } else if sample.offset_y < -t.distance_px {
                    Step::Up
                } else {
                    Step::Stay
                }
            }
        }
    }
}

/// Next state for a drag with default thresholds and `threshold_px` as the
/// required drag distance
pub fn transition(current: PanelState, sample: GestureSample, threshold_px: f32) -> PanelState {
    GestureStateMachine::default()
        .with_distance_threshold(threshold_px)
        .decide(current, sample, None)
}

/// Explicit open: always enters at `Half`
pub fn open() -> PanelState {
    PanelState::Half
}

/// Explicit close: always `Hidden`, from any state
pub fn close() -> PanelState {
    PanelState::Hidden
}

/// Tap-to-toggle between half and full
pub fn toggle_expand(current: PanelState) -> PanelState {
    if current == PanelState::Half {
        PanelState::Full
    } else {
        PanelState::Half
    }
}
