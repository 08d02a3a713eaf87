//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only as elapsed milliseconds passed to `tick`
//! - Input is a snapshot read once per tick
//! - No rendering, audio or platform dependencies

pub mod clock;
pub mod collision;
pub mod detector;
pub mod geometry;
pub mod player;
pub mod state;
pub mod tick;

pub use clock::MatchClock;
pub use collision::{first_contact, player_detector_contact, player_hits_detector};
pub use detector::{Detector, DetectorStep, PhaseBand, PhaseSchedule};
pub use geometry::{Segment, point_in_circle, segment_intersect};
pub use player::PlayerBody;
pub use state::{
    Arena, Direction, EndReason, GameEvent, InputState, MatchPhase, MatchState, RenderSnapshot,
};
pub use tick::tick;
