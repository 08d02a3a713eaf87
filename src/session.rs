//! Match controller
//!
//! `Session` is the single owner of match state for the process. Start and
//! reset commands, per-frame updates and the leaderboard all go through it.

use crate::highscores::HighScores;
use crate::sim::{EndReason, GameEvent, InputState, MatchPhase, MatchState, RenderSnapshot, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    state: MatchState,
    high_scores: HighScores,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        let state = MatchState::new(&tuning);
        Self {
            tuning,
            state,
            high_scores: HighScores::new(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable access for scripted setups (tests, demos)
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Re-initialize the match and return to `Idle`
    pub fn reset_scene(&mut self) {
        self.state.reset(&self.tuning);
        log::debug!("Scene reset");
    }

    /// Enter `Running` with the given match length. Only valid from `Idle`.
    pub fn play(&mut self, duration_ms: f64) -> Option<GameEvent> {
        self.state.start(duration_ms)
    }

    /// `play` with the configured match length
    pub fn play_default(&mut self) -> Option<GameEvent> {
        self.play(self.tuning.match_duration_ms)
    }

    /// One simulation tick at `elapsed_ms` since the match started
    pub fn frame(&mut self, elapsed_ms: f64, input: &InputState) -> Option<GameEvent> {
        let event = tick(&mut self.state, input, elapsed_ms);
        if let Some(GameEvent::GameOver { score, reason, .. }) = event {
            self.record(score, reason);
        }
        event
    }

    /// Keep going while running and not yet terminal
    pub fn is_running(&self) -> bool {
        self.state.phase == MatchPhase::Running
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }

    fn record(&mut self, score: u32, reason: EndReason) {
        if let Some(rank) = self
            .high_scores
            .add_score(score, reason, self.state.clock.elapsed_ms)
        {
            log::info!("Score {} placed #{} on the board", score, rank);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
