//! Game balance and arena configuration
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! file only needs the keys it wants to override:
//!
//! ```json
//! { "match_duration_ms": 30000, "friction": 0.8 }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::detector::PhaseSchedule;
use crate::sim::player::PlayerBody;
use crate::sim::state::Arena;

/// Errors raised while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl TuningError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TuningError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Tunable constants for one process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_center: Vec2,
    pub arena_radius: f32,

    // === Match ===
    pub match_duration_ms: f64,
    /// Step used by the fixed-step driver
    pub frame_step_ms: f64,

    // === Player ===
    pub player_size: Vec2,
    /// Top-left corner at reset
    pub player_spawn: Vec2,
    /// Speed cap before the schedule raises it
    pub base_speed: f32,
    pub friction: f32,

    // === Detector (degrees) ===
    pub detector_start_angle: f32,
    pub detector_base_arc: f32,
    pub detector_arc_growth: f32,
    pub schedule: PhaseSchedule,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_center: ARENA_CENTER,
            arena_radius: ARENA_RADIUS,

            match_duration_ms: MATCH_DURATION_MS,
            frame_step_ms: FRAME_STEP_MS,

            player_size: PLAYER_SIZE,
            player_spawn: PLAYER_SPAWN,
            base_speed: PLAYER_BASE_SPEED,
            friction: PLAYER_FRICTION,

            detector_start_angle: DETECTOR_START_ANGLE,
            detector_base_arc: DETECTOR_BASE_ARC,
            detector_arc_growth: DETECTOR_ARC_GROWTH,
            schedule: PhaseSchedule::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.arena_radius > 0.0) {
            return Err(TuningError::invalid("arena_radius", "must be positive"));
        }
        if !(self.match_duration_ms > 0.0) {
            return Err(TuningError::invalid("match_duration_ms", "must be positive"));
        }
        if !(self.frame_step_ms > 0.0) {
            return Err(TuningError::invalid("frame_step_ms", "must be positive"));
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(TuningError::invalid(
                "friction",
                format!("{} is outside (0, 1)", self.friction),
            ));
        }
        if !(self.base_speed > 0.0) {
            return Err(TuningError::invalid("base_speed", "must be positive"));
        }
        if !(self.player_size.x > 0.0 && self.player_size.y > 0.0) {
            return Err(TuningError::invalid("player_size", "must be positive on both axes"));
        }

        let arena = Arena {
            center: self.arena_center,
            radius: self.arena_radius,
        };
        let spawn = PlayerBody::new(self.player_spawn, self.player_size, self.base_speed, self.friction);
        if !spawn.is_contained(&arena) {
            return Err(TuningError::invalid(
                "player_spawn",
                "player box must start strictly inside the arena",
            ));
        }

        if !(self.detector_base_arc >= 0.0) {
            return Err(TuningError::invalid("detector_base_arc", "must not be negative"));
        }
        if !(self.detector_arc_growth >= 0.0) {
            return Err(TuningError::invalid("detector_arc_growth", "must not be negative"));
        }

        let mut previous = 0.0;
        for band in &self.schedule.bands {
            if !(band.until > previous && band.until <= 1.0) {
                return Err(TuningError::invalid(
                    "schedule",
                    "band bounds must increase strictly within (0, 1]",
                ));
            }
            if band.speed_cap.is_some_and(|cap| !(cap > 0.0)) {
                return Err(TuningError::invalid("schedule", "speed caps must be positive"));
            }
            previous = band.until;
        }

        Ok(())
    }
}
