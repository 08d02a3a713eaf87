//! Player body: input-driven velocity, friction and arena containment

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Segment;
use super::state::{Arena, Direction, InputState};
use crate::consts::PLAYER_ACCEL;

/// The player-controlled box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Max per-axis speed reachable through input
    pub speed_cap: f32,
    /// Per-tick velocity decay factor
    pub friction: f32,
}

impl PlayerBody {
    pub fn new(spawn: Vec2, size: Vec2, speed_cap: f32, friction: f32) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            speed_cap,
            friction,
        }
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let Vec2 { x, y } = self.pos;
        let Vec2 { x: w, y: h } = self.size;
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]
    }

    /// Boundary edges in order: top, right, bottom, left
    pub fn edges(&self) -> [Segment; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Accelerate toward each held direction, saturating at the speed cap
    pub fn apply_input(&mut self, input: &InputState) {
        let cap = self.speed_cap;
        if input.is_held(Direction::Up) && self.vel.y > -cap {
            self.vel.y = (self.vel.y - PLAYER_ACCEL).max(-cap);
        }
        if input.is_held(Direction::Down) && self.vel.y < cap {
            self.vel.y = (self.vel.y + PLAYER_ACCEL).min(cap);
        }
        if input.is_held(Direction::Right) && self.vel.x < cap {
            self.vel.x = (self.vel.x + PLAYER_ACCEL).min(cap);
        }
        if input.is_held(Direction::Left) && self.vel.x > -cap {
            self.vel.x = (self.vel.x - PLAYER_ACCEL).max(-cap);
        }
    }

    /// Exponential decay toward zero
    pub fn apply_friction(&mut self) {
        self.vel *= self.friction;
    }

    /// Move by the current velocity, one axis at a time.
    ///
    /// An axis only advances if both corners on its leading edge stay strictly
    /// inside the arena after the move. A blocked axis keeps its velocity, so
    /// the body slides along the wall on the other axis.
    pub fn advance(&mut self, arena: &Arena) {
        let [tl, tr, br, bl] = self.corners();
        let step = Vec2::new(self.vel.x, 0.0);
        let leading = if self.vel.x < 0.0 {
            Some((tl, bl))
        } else if self.vel.x > 0.0 {
            Some((tr, br))
        } else {
            None
        };
        if let Some((a, b)) = leading {
            if arena.contains(a + step) && arena.contains(b + step) {
                self.pos.x += self.vel.x;
            }
        }

        // Vertical check sees the horizontal result
        let [tl, tr, br, bl] = self.corners();
        let step = Vec2::new(0.0, self.vel.y);
        let leading = if self.vel.y < 0.0 {
            Some((tl, tr))
        } else if self.vel.y > 0.0 {
            Some((bl, br))
        } else {
            None
        };
        if let Some((a, b)) = leading {
            if arena.contains(a + step) && arena.contains(b + step) {
                self.pos.y += self.vel.y;
            }
        }
    }

    /// True if every corner is strictly inside the arena
    pub fn is_contained(&self, arena: &Arena) -> bool {
        self.corners().iter().all(|c| arena.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn spawn() -> PlayerBody {
        PlayerBody::new(PLAYER_SPAWN, PLAYER_SIZE, PLAYER_BASE_SPEED, PLAYER_FRICTION)
    }

    fn held(direction: Direction) -> InputState {
        let mut input = InputState::default();
        input.set(direction, true);
        input
    }

    #[test]
    fn test_input_saturates_at_cap() {
        let mut body = spawn();
        let right = held(Direction::Right);
        for _ in 0..10 {
            body.apply_input(&right);
        }
        assert_eq!(body.vel.x, PLAYER_BASE_SPEED);

        // Non-integer cap: still never overshoots
        body.speed_cap = 2.2;
        body.vel = Vec2::new(-1.5, 0.0);
        body.apply_input(&held(Direction::Left));
        assert!((body.vel.x + 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut body = spawn();
        let mut input = InputState::default();
        input.set(Direction::Up, true);
        input.set(Direction::Down, true);
        body.apply_input(&input);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_friction_decays_without_reaching_zero() {
        let mut body = spawn();
        body.vel = Vec2::new(2.0, -2.0);
        let arena = Arena::default();
        let idle = InputState::default();
        let mut last = body.vel.abs();
        // f32 components stay normal for ~300 ticks; `length()` squares them
        // and stalls near tick 180, so compare per axis and stop well short
        for tick in 0..250 {
            body.apply_input(&idle);
            body.apply_friction();
            body.advance(&arena);
            let speed = body.vel.abs();
            assert!(speed.x < last.x && speed.y < last.y, "no decay at tick {tick}");
            last = speed;
        }
        // Past that, subnormal rounding pins the value above zero
        for _ in 0..1000 {
            body.apply_friction();
            assert!(body.vel.x != 0.0 && body.vel.y != 0.0);
        }
        // Movement has effectively stopped
        let before = body.pos;
        body.apply_friction();
        body.advance(&arena);
        assert!((body.pos - before).length() < 1e-4);
    }

    #[test]
    fn test_edges_follow_corners() {
        let body = spawn();
        let edges = body.edges();
        let corners = body.corners();
        assert_eq!(edges[0].a, corners[0]);
        assert_eq!(edges[1].a, corners[1]);
        assert_eq!(edges[2].a, corners[2]);
        assert_eq!(edges[3].a, corners[3]);
        assert_eq!(edges[3].b, corners[0]);
        assert_eq!(body.center(), Vec2::new(205.0, 115.0));
    }

    #[test]
    fn test_wall_blocks_axis_but_keeps_velocity() {
        let arena = Arena::default();
        let mut body = spawn();
        // Drive straight up until the wall stops us
        let up = held(Direction::Up);
        for _ in 0..500 {
            body.apply_input(&up);
            body.apply_friction();
            body.advance(&arena);
            assert!(body.is_contained(&arena));
        }
        let stuck_y = body.pos.y;
        body.apply_input(&up);
        body.apply_friction();
        body.advance(&arena);
        assert_eq!(body.pos.y, stuck_y);
        assert!(body.vel.y < 0.0);

        // The horizontal axis is independent: slide toward the middle
        let mut input = up;
        input.set(Direction::Left, true);
        body.apply_input(&input);
        body.apply_friction();
        let x_before = body.pos.x;
        body.advance(&arena);
        assert!(body.pos.x < x_before);
        assert!(body.is_contained(&arena));
    }

    #[test]
    fn test_stays_contained_under_every_direction() {
        let arena = Arena::default();
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let mut body = spawn();
            let input = held(direction);
            for _ in 0..1000 {
                body.apply_input(&input);
                body.apply_friction();
                body.advance(&arena);
                assert!(body.is_contained(&arena), "escaped moving {direction:?}");
            }
        }
    }
}
