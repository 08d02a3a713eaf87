//! Match state and core simulation types
//!
//! Everything one match needs lives in `MatchState`; the best score survives
//! resets and is only touched when a match ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::MatchClock;
use super::detector::Detector;
use super::geometry::point_in_circle;
use super::player::PlayerBody;
use crate::consts::*;
use crate::pi;
use crate::tuning::Tuning;

/// The circular play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            center: ARENA_CENTER,
            radius: ARENA_RADIUS,
        }
    }
}

impl Arena {
    /// Strictly inside (the boundary itself is outside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_circle(point, self.center, self.radius)
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Reset and waiting for a start command
    Idle,
    /// Ticking
    Running,
    /// Ended by collision or time; waits for an explicit reset
    GameOver,
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Collision,
    TimeUp,
}

/// Events for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    MatchStarted {
        duration_ms: f64,
    },
    /// Emitted exactly once per match
    GameOver {
        score: u32,
        is_new_high_score: bool,
        reason: EndReason,
    },
}

/// Directional inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a browser-style key name ("ArrowUp", ...) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Point-in-time snapshot of held directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Apply a key event; keys that are not arrows are ignored
    pub fn handle_key(&mut self, key: &str, held: bool) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set(direction, held);
                true
            }
            None => false,
        }
    }
}

/// Render-ready view of the match, produced after each update
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub phase: MatchPhase,
    pub player_pos: Vec2,
    pub player_size: Vec2,
    /// Radians
    pub detector_start: f32,
    /// Radians
    pub detector_end: f32,
    pub arena_center: Vec2,
    pub arena_radius: f32,
    pub progress: f32,
    pub score: u32,
    pub high_score: Option<u32>,
    pub score_text: String,
}

/// Complete match state (deterministic given the same elapsed times and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub player: PlayerBody,
    pub detector: Detector,
    pub clock: MatchClock,
    pub phase: MatchPhase,
    /// Terminal flag set by the collision engine
    pub collided: bool,
    /// Best score this process has seen; never reset
    pub high_score: Option<u32>,
    pub end_reason: Option<EndReason>,
    /// Ticks processed in the current match
    pub ticks: u64,
    /// Schedule band seen on the previous tick
    #[serde(skip)]
    pub(crate) band: Option<usize>,
}

impl MatchState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            arena: Arena {
                center: tuning.arena_center,
                radius: tuning.arena_radius,
            },
            player: PlayerBody::new(
                tuning.player_spawn,
                tuning.player_size,
                tuning.base_speed,
                tuning.friction,
            ),
            detector: Detector::new(
                tuning.detector_start_angle,
                tuning.detector_base_arc,
                tuning.detector_arc_growth,
                tuning.schedule.clone(),
            ),
            clock: MatchClock::new(tuning.match_duration_ms),
            phase: MatchPhase::Idle,
            collided: false,
            high_score: None,
            end_reason: None,
            ticks: 0,
            band: None,
        }
    }

    /// Back to `Idle`: player at spawn with no velocity and base speed,
    /// detector at its start, score zeroed. The high score is kept.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.player.pos = tuning.player_spawn;
        self.player.vel = Vec2::ZERO;
        self.player.speed_cap = tuning.base_speed;
        self.detector.reset();
        self.clock.reset();
        self.phase = MatchPhase::Idle;
        self.collided = false;
        self.end_reason = None;
        self.ticks = 0;
        self.band = None;
    }

    /// `Idle -> Running` with the given duration. Ignored in other phases.
    pub fn start(&mut self, duration_ms: f64) -> Option<GameEvent> {
        if self.phase != MatchPhase::Idle {
            log::warn!("Start ignored in phase {:?}", self.phase);
            return None;
        }
        if !(duration_ms.is_finite() && duration_ms > 0.0) {
            log::warn!("Start ignored: match duration {} ms", duration_ms);
            return None;
        }
        self.clock.set_duration(duration_ms);
        self.phase = MatchPhase::Running;
        log::info!("Match started ({} ms)", duration_ms);
        Some(GameEvent::MatchStarted { duration_ms })
    }

    /// Whether a running match should stop after this tick
    pub fn is_terminal(&self) -> bool {
        self.collided || self.clock.is_finished()
    }

    /// Move to `GameOver`, settle the high score, and build the terminal event
    pub(crate) fn finish(&mut self) -> GameEvent {
        let reason = if self.collided {
            EndReason::Collision
        } else {
            EndReason::TimeUp
        };
        let score = self.clock.score;
        let is_new_high_score = self.high_score.is_none_or(|best| score > best);
        if is_new_high_score {
            self.high_score = Some(score);
            log::info!("New high score: {}", score);
        }
        self.phase = MatchPhase::GameOver;
        self.end_reason = Some(reason);
        log::info!(
            "Game over ({:?}) after {} ticks, score {}",
            reason,
            self.ticks,
            score
        );
        GameEvent::GameOver {
            score,
            is_new_high_score,
            reason,
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase,
            player_pos: self.player.pos,
            player_size: self.player.size,
            detector_start: self.detector.start_angle(),
            detector_end: self.detector.end_angle(),
            arena_center: self.arena.center,
            arena_radius: self.arena.radius,
            progress: self.clock.progress,
            score: self.clock.score,
            high_score: self.high_score,
            score_text: pi::score_text(self.clock.score),
        }
    }
}
