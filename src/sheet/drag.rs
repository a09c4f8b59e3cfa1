//! Drag tracking
//!
//! Accumulates pointer positions for one drag interaction and produces the
//! `GestureSample` handed to the state machine on release.

use std::collections::VecDeque;

use super::gesture::GestureSample;

/// Only samples this recent contribute to the release velocity
pub const VELOCITY_WINDOW_MS: u64 = 100;

/// Cap on retained samples; older ones fall out of the window anyway
const MAX_SAMPLES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerSample {
    y: f32,
    time_ms: u64,
}

/// In-progress drag of the sheet handle
#[derive(Debug, Clone)]
pub struct DragTracker {
    origin_y: f32,
    started_ms: u64,
    recent: VecDeque<PointerSample>,
}

impl DragTracker {
    /// Begin a drag at pointer position `y`
    pub fn start(y: f32, time_ms: u64) -> Self {
        let mut recent = VecDeque::with_capacity(MAX_SAMPLES);
        recent.push_back(PointerSample { y, time_ms });
        Self {
            origin_y: y,
            started_ms: time_ms,
            recent,
        }
    }

    /// Record a pointer move
    ///
    /// Samples that go back in time or carry non-finite positions are dropped.
    pub fn record(&mut self, y: f32, time_ms: u64) {
        if !y.is_finite() {
            return;
        }
        if let Some(last) = self.recent.back() {
            if time_ms < last.time_ms {
                return;
            }
        }

        self.recent.push_back(PointerSample { y, time_ms });
        while self.recent.len() > MAX_SAMPLES {
            self.recent.pop_front();
        }
        while let Some(front) = self.recent.front() {
            if time_ms.saturating_sub(front.time_ms) > VELOCITY_WINDOW_MS && self.recent.len() > 2
            {
                self.recent.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current displacement from the drag origin (positive = down)
    pub fn offset(&self) -> f32 {
        self.recent
            .back()
            .map(|s| s.y - self.origin_y)
            .unwrap_or(0.0)
    }

    /// Milliseconds since the drag began, as of the latest sample
    pub fn elapsed_ms(&self) -> u64 {
        self.recent
            .back()
            .map(|s| s.time_ms.saturating_sub(self.started_ms))
            .unwrap_or(0)
    }

    /// Velocity over the recent window in px/s (positive = down)
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.recent.front(), self.recent.back()) else {
            return 0.0;
        };
        let dt_ms = last.time_ms.saturating_sub(first.time_ms);
        if dt_ms == 0 {
            return 0.0;
        }
        (last.y - first.y) / (dt_ms as f32 / 1000.0)
    }

    /// Record the release position and produce the gesture sample
    pub fn finish(mut self, y: f32, time_ms: u64) -> GestureSample {
        self.record(y, time_ms);
        let sample = GestureSample::new(self.offset(), self.velocity());
        tracing::trace!(
            target: "sheet::drag",
            offset_y = sample.offset_y,
            velocity_y = sample.velocity_y,
            elapsed_ms = self.elapsed_ms(),
            "drag finished"
        );
        sample
    }
}
