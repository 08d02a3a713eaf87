//! Pi Sweep headless runner
//!
//! Plays a few demo matches with the seeded pilot and logs the results.
//!
//! Usage: `pi-sweep [tuning.json] [seed] [matches]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pi Sweep (headless) starting...");

    if let Err(e) = native::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is driven by the host page on the web; nothing to run here
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use pi_sweep::driver::{FrameDriver, StepMode, run_headless};
    use pi_sweep::pi::score_text;
    use pi_sweep::pilot::DemoPilot;
    use pi_sweep::sim::GameEvent;
    use pi_sweep::{Session, Tuning, TuningError};

    const DEFAULT_SEED: u64 = 314;
    const DEFAULT_MATCHES: u32 = 3;

    pub fn run(args: Vec<String>) -> Result<(), TuningError> {
        let tuning = match args.first() {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let seed = args
            .get(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let matches = args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MATCHES);

        let step_ms = tuning.frame_step_ms;
        // Enough frames to cover the whole match plus slack
        let max_frames = (tuning.match_duration_ms / step_ms).ceil() as u32 + 10;
        let mut session = Session::new(tuning);
        let mut driver = FrameDriver::new(StepMode::Fixed { step_ms });

        for round in 0..matches {
            let mut pilot = DemoPilot::new(seed.wrapping_add(round as u64));
            session.reset_scene();
            driver.reset();
            session.play_default();

            let event = run_headless(&mut session, &mut driver, step_ms, max_frames, |snapshot| {
                pilot.next_input(snapshot)
            });

            match event {
                Some(GameEvent::GameOver {
                    score,
                    is_new_high_score,
                    reason,
                }) => {
                    log::info!(
                        "Match {}: {:?} at {:.1}s, score {}{}",
                        round + 1,
                        reason,
                        driver.elapsed_ms() / 1000.0,
                        score,
                        if is_new_high_score { " (new high score)" } else { "" }
                    );
                    log::info!("  {}", score_text(score));
                }
                _ => log::warn!("Match {} did not finish", round + 1),
            }
        }

        for (rank, entry) in session.high_scores().entries.iter().enumerate() {
            log::info!(
                "#{} {} ({:?}, {:.1}s)",
                rank + 1,
                entry.score,
                entry.reason,
                entry.elapsed_ms / 1000.0
            );
        }
        Ok(())
    }
}
