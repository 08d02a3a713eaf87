//! Frame scheduling
//!
//! Turns display frames into simulation ticks. `Variable` issues one tick per
//! frame at the accumulated frame time, like an animation callback. `Fixed`
//! accumulates frame time and ticks in constant steps, capped per frame.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::session::Session;
use crate::sim::{GameEvent, InputState, RenderSnapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    /// One tick per frame
    Variable,
    /// Ticks of `step_ms`, at most `MAX_SUBSTEPS` per frame
    Fixed { step_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct FrameDriver {
    mode: StepMode,
    /// Match time handed to the simulation so far
    elapsed_ms: f64,
    accumulator: f64,
}

impl FrameDriver {
    pub fn new(mode: StepMode) -> Self {
        Self {
            mode,
            elapsed_ms: 0.0,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Call when a new match starts
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.accumulator = 0.0;
    }

    /// Feed one display frame lasting `frame_ms`.
    ///
    /// Returns the terminal event if the match ended during this frame.
    pub fn advance(&mut self, session: &mut Session, frame_ms: f64, input: &InputState) -> Option<GameEvent> {
        // Match time only flows while a match runs, and starts over with each match
        if !session.is_running() {
            self.reset();
            return None;
        }
        if session.state().ticks == 0 {
            self.reset();
        }

        let frame_ms = frame_ms.max(0.0);
        match self.mode {
            StepMode::Variable => {
                self.elapsed_ms += frame_ms;
                session.frame(self.elapsed_ms, input)
            }
            StepMode::Fixed { step_ms } => {
                // Clamp to prevent a catch-up spiral after a stall
                self.accumulator += frame_ms.min(MAX_FRAME_MS);

                let mut substeps = 0;
                while self.accumulator >= step_ms && substeps < MAX_SUBSTEPS && session.is_running() {
                    self.elapsed_ms += step_ms;
                    self.accumulator -= step_ms;
                    substeps += 1;
                    if let Some(event) = session.frame(self.elapsed_ms, input) {
                        return Some(event);
                    }
                }
                if substeps == MAX_SUBSTEPS && self.accumulator >= step_ms {
                    log::warn!(
                        "Substep cap hit; {:.1} ms carried to next frame",
                        self.accumulator
                    );
                }
                None
            }
        }
    }
}

/// Drive a started match until it ends or `max_frames` frames pass.
///
/// `pilot` sees the latest snapshot and picks the input for the next frame.
pub fn run_headless<F>(
    session: &mut Session,
    driver: &mut FrameDriver,
    frame_ms: f64,
    max_frames: u32,
    mut pilot: F,
) -> Option<GameEvent>
where
    F: FnMut(&RenderSnapshot) -> InputState,
{
    let mut frames = 0;
    while session.is_running() && frames < max_frames {
        let input = pilot(&session.snapshot());
        if let Some(event) = driver.advance(session, frame_ms, &input) {
            return Some(event);
        }
        frames += 1;
    }
    if session.is_running() {
        log::warn!("Headless run stopped after {} frames without ending", frames);
    }
    None
}
