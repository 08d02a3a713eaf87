//! Per-frame simulation tick
//!
//! One call per animation frame: score, player, detector, collision, then the
//! terminal check. Rendering reads `MatchState::snapshot` afterwards.

use super::collision::player_hits_detector;
use super::state::{GameEvent, InputState, MatchPhase, MatchState};

/// Advance a running match to `elapsed_ms` since it started.
///
/// Does nothing outside `Running`. Returns the terminal event on the tick
/// that ends the match.
pub fn tick(state: &mut MatchState, input: &InputState, elapsed_ms: f64) -> Option<GameEvent> {
    if state.phase != MatchPhase::Running {
        log::debug!("Tick ignored in phase {:?}", state.phase);
        return None;
    }

    state.ticks += 1;

    // Score is recomputed only when the whole-second count changes
    state.clock.update(elapsed_ms);
    let progress = state.clock.progress;

    state.player.apply_input(input);
    state.player.apply_friction();
    state.player.advance(&state.arena);

    let step = state.detector.advance(progress);
    if step.band != state.band {
        log::debug!(
            "Schedule band {:?} -> {:?} at progress {:.3}",
            state.band,
            step.band,
            progress
        );
        state.band = step.band;
    }
    if let Some(cap) = step.speed_cap {
        state.player.speed_cap = cap;
    }

    state.collided = player_hits_detector(&state.player, &state.detector, &state.arena);

    log::trace!(
        "tick {} progress {:.3} pos {:?} collided {}",
        state.ticks,
        progress,
        state.player.pos,
        state.collided
    );

    if state.is_terminal() {
        Some(state.finish())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::polar_to_cartesian;
    use crate::sim::state::{Direction, EndReason};
    use crate::tuning::Tuning;

    fn running() -> (MatchState, Tuning) {
        let tuning = Tuning::default();
        let mut state = MatchState::new(&tuning);
        state.start(tuning.match_duration_ms);
        (state, tuning)
    }

    #[test]
    fn test_tick_idle_is_noop() {
        let tuning = Tuning::default();
        let mut state = MatchState::new(&tuning);
        state.reset(&tuning);
        let event = tick(&mut state, &InputState::default(), 16.0);
        assert!(event.is_none());
        assert_eq!(state.clock.score, 0);
        assert!(!state.collided);
        assert_eq!(state.player.pos, tuning.player_spawn);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let (mut state, _) = running();
        state.collided = true;
        state.finish();
        let pos = state.player.pos;
        let angle = state.detector.center_angle;
        assert!(tick(&mut state, &InputState::default(), 500.0).is_none());
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.player.pos, pos);
        assert_eq!(state.detector.center_angle, angle);
    }

    #[test]
    fn test_first_tick_sets_baseline_score() {
        let (mut state, _) = running();
        assert!(tick(&mut state, &InputState::default(), 0.0).is_none());
        assert_eq!(state.clock.score, SCORE_BASELINE);
        assert_eq!(state.phase, MatchPhase::Running);
    }

    #[test]
    fn test_mid_match_speed_cap_and_arc() {
        let (mut state, _) = running();
        let idle = InputState::default();
        for elapsed in [10_000.0, 20_000.0, 30_000.0] {
            assert!(tick(&mut state, &idle, elapsed).is_none());
        }
        assert_eq!(state.clock.progress, 0.5);
        assert_eq!(state.player.speed_cap, 2.2);
        assert_eq!(state.detector.arc_span, 195.0);
    }

    #[test]
    fn test_player_on_start_edge_collides_immediately() {
        let (mut state, _) = running();
        let on_edge = polar_to_cartesian(
            state.arena.center,
            100.0,
            state.detector.start_angle(),
        );
        state.player.pos = on_edge - state.player.size / 2.0;
        let event = tick(&mut state, &InputState::default(), 0.0);
        assert_eq!(
            event,
            Some(GameEvent::GameOver {
                score: SCORE_BASELINE,
                is_new_high_score: true,
                reason: EndReason::Collision,
            })
        );
        assert!(state.collided);
        assert_eq!(state.phase, MatchPhase::GameOver);
    }

    #[test]
    fn test_collision_sees_this_ticks_move() {
        // Box just left of the start edge, top-right corner 1px away
        let place = |state: &mut MatchState, vel_x: f32| {
            let top = state.arena.center.y + 100.0;
            let edge_x = state.arena.center.x + 100.0 / state.detector.start_angle().tan();
            state.player.pos = Vec2::new(edge_x - 1.0 - state.player.size.x, top);
            state.player.vel = Vec2::new(vel_x, 0.0);
        };

        let (mut resting, _) = running();
        place(&mut resting, 0.0);
        assert!(tick(&mut resting, &InputState::default(), 0.0).is_none());
        assert!(!resting.collided);

        // Moves 1.5px this tick and is caught on the same tick
        let (mut moving, _) = running();
        place(&mut moving, 2.0);
        let event = tick(&mut moving, &InputState::default(), 0.0);
        assert!(moving.collided);
        assert!(matches!(
            event,
            Some(GameEvent::GameOver {
                reason: EndReason::Collision,
                ..
            })
        ));
    }

    #[test]
    fn test_full_duration_without_collision_times_out() {
        // Coarse frames: the detector barely turns, so the spawn is never swept
        let (mut state, _) = running();
        let idle = InputState::default();
        let mut events = Vec::new();
        for i in 1..=6 {
            if let Some(event) = tick(&mut state, &idle, i as f64 * 10_000.0) {
                events.push(event);
            }
        }
        assert_eq!(state.clock.progress, 1.0);
        assert!(!state.collided);
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                score: 69,
                is_new_high_score: true,
                reason: EndReason::TimeUp,
            }]
        );

        // Nothing more happens after the end
        assert!(tick(&mut state, &idle, 70_000.0).is_none());
        assert_eq!(state.ticks, 6);
    }

    #[test]
    fn test_idle_player_is_swept_at_frame_rate() {
        let (mut state, _) = running();
        let idle = InputState::default();
        let mut event = None;
        let mut frame = 0u32;
        while event.is_none() && frame < 10_000 {
            frame += 1;
            event = tick(&mut state, &idle, frame as f64 * FRAME_STEP_MS);
        }
        assert!(matches!(
            event,
            Some(GameEvent::GameOver {
                reason: EndReason::Collision,
                ..
            })
        ));
        // Caught during the first band
        assert!(state.clock.progress < 0.33);
    }

    #[test]
    fn test_held_input_moves_player_and_stays_contained() {
        let (mut state, _) = running();
        let mut input = InputState::default();
        input.set(Direction::Left, true);
        let start = state.player.pos;
        for frame in 1..=30 {
            tick(&mut state, &input, frame as f64 * FRAME_STEP_MS);
            assert!(state.player.is_contained(&state.arena));
        }
        assert!(state.player.pos.x < start.x);
    }

    #[test]
    fn test_determinism() {
        let (mut a, _) = running();
        let (mut b, _) = running();
        let mut input = InputState::default();
        for frame in 1..=120 {
            input.set(Direction::Right, frame % 20 < 10);
            input.set(Direction::Down, frame % 30 < 15);
            let elapsed = frame as f64 * FRAME_STEP_MS;
            let ea = tick(&mut a, &input, elapsed);
            let eb = tick(&mut b, &input, elapsed);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.detector.center_angle, b.detector.center_angle);
    }
}
