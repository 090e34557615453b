//! Gravity Runner entry point
//!
//! Native builds run a headless autopilot session: the simulation is driven
//! by a fixed frame clock, a simple bot flips gravity to dodge, and the high
//! score is kept in a JSON file. Browser builds use the library's `web`
//! export instead.
//!
//! Usage: `gravity-runner [settings.json] [store.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::{Path, PathBuf};

    use gravity_runner::consts::SIM_DT;
    use gravity_runner::persistence::JsonFileStore;
    use gravity_runner::platform::{self, ButtonState, FixedStep, FrameInput};
    use gravity_runner::sim::Lane;
    use gravity_runner::{ConfigError, GameEvent, GameManager, GamePhase, GameSettings};

    /// Frame clock for the headless loop (30 fps, two sim steps per frame)
    const FRAME_DT: f32 = 1.0 / 30.0;
    /// Runs to play before exiting
    const RUNS: u32 = 3;
    /// Hard stop per run, in seconds
    const RUN_TIME_LIMIT: f32 = 120.0;
    /// Bot flips when an obstacle in its lane is this close
    const DODGE_DISTANCE: f32 = 2.5;

    struct Headless {
        manager: GameManager,
        clock: FixedStep,
        input: FrameInput,
        /// Bot "holds" jump while a threat is close; only the press counts
        jump_button: ButtonState,
    }

    impl Headless {
        fn new(manager: GameManager) -> Self {
            Self {
                manager,
                clock: FixedStep::default(),
                input: FrameInput::default(),
                jump_button: ButtonState::default(),
            }
        }

        /// Run simulation steps for one frame
        fn update(&mut self, dt: f32) {
            for _ in 0..self.clock.advance(dt) {
                let input = self.input;
                self.manager.update(SIM_DT, &input);

                // Clear one-shot inputs after processing
                self.input.jump = false;
                self.input.cancel = false;

                for event in self.manager.drain_events() {
                    log_event(&event);
                }
            }
        }

        /// Flip gravity when an obstacle is about to hit the lane we stand in
        fn autopilot(&mut self) {
            let player = self.manager.player();
            let our_lane = if player.is_flipped() {
                Lane::Top
            } else {
                Lane::Bottom
            };
            let threat = self.manager.spawner().obstacles().iter().any(|o| {
                let ahead = o.pos.x - player.pos.x;
                o.lane == our_lane && ahead > 0.0 && ahead < DODGE_DISTANCE
            });
            if self.jump_button.update(threat) {
                self.input.jump = true;
            }
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::Started => log::info!("First run started"),
            GameEvent::Reset => log::debug!("Session reset"),
            GameEvent::Spawned(decision) => log::debug!("Spawned {:?}", decision),
            GameEvent::Lost {
                score,
                new_high_score,
            } => {
                if *new_high_score {
                    log::info!("New high score: {:.0}", score);
                } else {
                    log::info!("Run over: {:.0}", score);
                }
            }
        }
    }

    fn load_settings(path: Option<&Path>) -> Result<GameSettings, ConfigError> {
        match path {
            Some(path) => GameSettings::load(path),
            None => Ok(GameSettings::default()),
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        platform::init_logging();
        log::info!("Gravity Runner (headless) starting...");

        let mut args = std::env::args().skip(1);
        let settings_path = args.next().map(PathBuf::from);
        let store_path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("gravity-runner-save.json"));

        let settings = load_settings(settings_path.as_deref())?;
        let store = JsonFileStore::open(store_path);
        log::info!("High score stored in {}", store.path().display());
        let mut game = Headless::new(GameManager::new(settings, Box::new(store))?);

        for run in 1..=RUNS {
            // Jump starts the first run and retries after a loss; a run that
            // hit the time limit is cancelled instead
            if game.manager.phase() == GamePhase::Playing {
                game.input.cancel = true;
            } else {
                game.input.jump = true;
            }
            game.update(FRAME_DT);

            let mut t = 0.0;
            while game.manager.phase() == GamePhase::Playing && t < RUN_TIME_LIMIT {
                game.autopilot();
                game.update(FRAME_DT);
                t += FRAME_DT;
            }
            log::info!(
                "Run {} finished after {:.1}s, score {:.0}, best {:.0}",
                run,
                t,
                game.manager.score(),
                game.manager.high_score()
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds start from `gravity_runner::web::wasm_main`
}
