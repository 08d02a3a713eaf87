//! Pi Sweep - A circular arena avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, detector, collisions, scoring)
//! - `session`: Match controller owning state, high scores and tuning
//! - `driver`: Frame scheduling (fixed or variable step)
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-process best score and leaderboard
//! - `pilot`: Seeded demo pilot for headless runs

pub mod driver;
pub mod highscores;
pub mod pi;
pub mod pilot;
pub mod session;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use session::Session;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
///
/// Screen-space units: origin top-left, y grows downward, angles run
/// clockwise on screen.
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions
    pub const ARENA_CENTER: Vec2 = Vec2::new(200.0, 200.0);
    pub const ARENA_RADIUS: f32 = 190.0;

    /// Default match length (1 minute)
    pub const MATCH_DURATION_MS: f64 = 60_000.0;

    /// Nominal frame length for the fixed-step driver (60 Hz)
    pub const FRAME_STEP_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will accept before clamping
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Player defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 30.0);
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(190.0, 100.0);
    pub const PLAYER_BASE_SPEED: f32 = 2.0;
    /// Per-tick velocity decay factor
    pub const PLAYER_FRICTION: f32 = 0.75;
    /// Velocity change per tick for a held direction
    pub const PLAYER_ACCEL: f32 = 1.0;

    /// Detector defaults (degrees)
    pub const DETECTOR_START_ANGLE: f32 = 90.0;
    pub const DETECTOR_BASE_ARC: f32 = 30.0;
    pub const DETECTOR_ARC_GROWTH: f32 = 330.0;

    /// Score starts here on the first running tick
    pub const SCORE_BASELINE: u32 = 1;
    /// Seconds of survival per score step
    pub const SECONDS_PER_SCORE_STEP: u64 = 3;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Point at distance `r` from `center` along angle `theta` (radians)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
