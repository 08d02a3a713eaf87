//! Match clock and scorer
//!
//! Progress is elapsed time over duration, clamped to [0, 1]. The score is
//! recomputed once per new whole second: each time the second counter
//! changes, `seconds / 3` is added to the running total.

use serde::{Deserialize, Serialize};

use crate::consts::{SCORE_BASELINE, SECONDS_PER_SCORE_STEP};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchClock {
    pub duration_ms: f64,
    pub elapsed_ms: f64,
    /// Normalized elapsed time in [0, 1]
    pub progress: f32,
    pub score: u32,
    last_whole_second: Option<u64>,
}

impl MatchClock {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0.0,
            progress: 0.0,
            score: 0,
            last_whole_second: None,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.progress = 0.0;
        self.score = 0;
        self.last_whole_second = None;
    }

    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
        self.progress = self.progress_at(self.elapsed_ms);
    }

    /// Progress for an elapsed time, clamped to [0, 1]
    pub fn progress_at(&self, elapsed_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Advance to `elapsed_ms` since match start. Time never runs backwards;
    /// an earlier value is treated as no time passing.
    ///
    /// Returns true when the score was recomputed this call.
    pub fn update(&mut self, elapsed_ms: f64) -> bool {
        self.elapsed_ms = elapsed_ms.max(self.elapsed_ms);
        self.progress = self.progress_at(self.elapsed_ms);

        let whole_seconds = (self.elapsed_ms / 1000.0).floor() as u64;
        if self.last_whole_second == Some(whole_seconds) {
            return false;
        }
        if self.last_whole_second.is_none() {
            self.score = SCORE_BASELINE;
        }
        self.last_whole_second = Some(whole_seconds);
        let step = (whole_seconds / SECONDS_PER_SCORE_STEP).min(u32::MAX as u64) as u32;
        self.score = self.score.saturating_add(step);
        true
    }

    /// Time is up
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}
