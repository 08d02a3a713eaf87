//! Demo pilot: seeded input for headless and attract-mode runs
//!
//! Wanders by holding random directions for short stretches, pulls back
//! toward the middle when close to the wall, and sidesteps when a detector
//! edge gets close.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Direction, InputState, RenderSnapshot};

/// Fraction of the arena radius past which the pilot heads back inward
const WALL_COMFORT: f32 = 0.7;
/// Angular distance (radians) at which an approaching edge triggers a dodge
const DODGE_ANGLE: f32 = 0.35;

#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: Pcg32,
    held: InputState,
    frames_left: u32,
}

impl DemoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: InputState::default(),
            frames_left: 0,
        }
    }

    /// Pick the input for the next frame
    pub fn next_input(&mut self, snapshot: &RenderSnapshot) -> InputState {
        let center = snapshot.player_pos + snapshot.player_size / 2.0;
        let offset = center - snapshot.arena_center;

        if let Some(input) = dodge(snapshot, offset) {
            return input;
        }

        if offset.length() > snapshot.arena_radius * WALL_COMFORT {
            return toward(-offset);
        }

        if self.frames_left == 0 {
            self.held = InputState::default();
            for direction in Direction::ALL {
                self.held.set(direction, self.rng.random_bool(0.3));
            }
            self.frames_left = self.rng.random_range(10..40);
        }
        self.frames_left -= 1;
        self.held
    }
}

/// Hold the keys that push along `dir`
fn toward(dir: Vec2) -> InputState {
    let mut input = InputState::default();
    input.set(Direction::Left, dir.x < 0.0);
    input.set(Direction::Right, dir.x > 0.0);
    input.set(Direction::Up, dir.y < 0.0);
    input.set(Direction::Down, dir.y > 0.0);
    input
}

/// Step away tangentially from the nearest detector edge if it is close
fn dodge(snapshot: &RenderSnapshot, offset: Vec2) -> Option<InputState> {
    if offset.length_squared() < 1.0 {
        return None;
    }
    let player_angle = offset.y.atan2(offset.x);
    let nearest = [snapshot.detector_start, snapshot.detector_end]
        .into_iter()
        .map(|edge| angle_between(player_angle, edge))
        .min_by(|a, b| a.abs().total_cmp(&b.abs()))?;

    if nearest.abs() > DODGE_ANGLE {
        return None;
    }

    // Tangent pointing away from the edge
    let tangent = Vec2::new(-offset.y, offset.x).normalize_or_zero();
    let away = if nearest > 0.0 { tangent } else { -tangent };
    Some(toward(away))
}

/// Signed angle from `edge` to `angle`, wrapped to [-pi, pi)
fn angle_between(angle: f32, edge: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle - edge + PI).rem_euclid(TAU) - PI
}
