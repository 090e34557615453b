//! Session lifecycle
//!
//! `GameManager` is the session context: it owns the spawner, the player,
//! the HUD model and the high score store, and drives the
//! not-started → playing → lost state machine from one `update` per frame.

use glam::Vec2;

use crate::error::ConfigError;
use crate::highscores::HighScore;
use crate::hud::Hud;
use crate::persistence::KeyValueStore;
use crate::platform::FrameInput;
use crate::settings::GameSettings;
use crate::sim::{Player, SpawnDecision, Spawner};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first jump
    NotStarted,
    /// Active run
    Playing,
    /// Player was hit; obstacles frozen
    Lost,
}

/// Things that happened during an update, for presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// First run of the process began
    Started,
    /// Session was reinitialized
    Reset,
    Spawned(SpawnDecision),
    Lost { score: f32, new_high_score: bool },
}

pub struct GameManager {
    settings: GameSettings,
    phase: GamePhase,
    /// Set by the first start; survives every reset
    has_started: bool,
    lost: bool,
    score: f32,
    high_score: HighScore,
    /// Canonical gravity, always pointing down
    gravity: Vec2,
    spawner: Spawner,
    player: Player,
    hud: Hud,
    store: Box<dyn KeyValueStore>,
    events: Vec<GameEvent>,
}

impl GameManager {
    /// Build a session from validated settings.
    ///
    /// Uses `settings.seed` when present, otherwise a random seed.
    pub fn new(settings: GameSettings, store: Box<dyn KeyValueStore>) -> Result<Self, ConfigError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Session seed: {}", seed);

        let spawner = Spawner::new(settings.spawner.clone(), seed);
        let player = Player::new(&settings.player, settings.spawner.baseline_y);
        let high_score = HighScore::load(store.as_ref());
        let mut manager = Self {
            phase: GamePhase::NotStarted,
            has_started: false,
            lost: false,
            score: 0.0,
            high_score,
            gravity: Vec2::ZERO,
            spawner,
            player,
            hud: Hud::default(),
            store,
            events: Vec::new(),
            settings,
        };
        manager.setup_game();
        Ok(manager)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Best score seen by this session, stored or not
    pub fn high_score(&self) -> f32 {
        self.high_score.best
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// (Re)initialize the session for the current `has_started` state.
    ///
    /// Safe to call repeatedly.
    pub fn setup_game(&mut self) {
        self.gravity = Vec2::new(0.0, -self.settings.player.gravity.abs());
        self.player.reset_gravity();

        if self.has_started {
            self.hud.show_playing();
            self.spawner.spawn_obstacles = true;
            self.phase = GamePhase::Playing;
        } else {
            self.hud.show_title();
            self.spawner.spawn_obstacles = false;
            self.phase = GamePhase::NotStarted;
        }

        // A failed save leaves the store behind the in-memory best
        self.high_score.refresh(self.store.as_ref());
        self.hud.high_score = self.high_score.best;
        self.hud.breaking_high_score = false;
        self.hud.score = self.score;
        self.lost = false;
    }

    /// Begin play. The first call marks the session as started for the
    /// rest of the process; every call then does a full reset.
    pub fn start_game(&mut self) {
        if !self.has_started {
            self.has_started = true;
            log::info!("Game started");
            self.events.push(GameEvent::Started);
        }
        self.reset_game();
    }

    /// Back to the configured starting conditions, as if the level was
    /// loaded fresh.
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.spawner.spawn_obstacles = false;
        self.spawner.restart();
        self.player = Player::new(&self.settings.player, self.settings.spawner.baseline_y);
        self.score = 0.0;
        self.setup_game();
        log::info!("Session reset ({:?})", self.phase);
        self.events.push(GameEvent::Reset);
    }

    /// End the run. Only the first call while playing has any effect.
    pub fn lose_game(&mut self) {
        if self.phase != GamePhase::Playing || self.lost {
            return;
        }

        self.spawner.modify_obstacle_speed(0.0);
        self.spawner.spawn_obstacles = false;
        self.hud.show_lost();
        self.lost = true;
        self.phase = GamePhase::Lost;

        let new_high_score = match self.high_score.record(self.store.as_mut(), self.score) {
            Ok(beaten) => beaten,
            Err(e) => {
                log::error!("Failed to save high score: {}", e);
                true
            }
        };
        log::info!("Game over with score {:.1}", self.score);
        self.events.push(GameEvent::Lost {
            score: self.score,
            new_high_score,
        });
    }

    /// Advance the session by `dt` seconds
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if input.cancel {
            self.reset_game();
            return;
        }

        if input.jump {
            match self.phase {
                GamePhase::NotStarted => {
                    if !self.has_started {
                        self.start_game();
                        return;
                    }
                }
                GamePhase::Playing => self.player.flip_gravity(),
                GamePhase::Lost => {
                    self.reset_game();
                    return;
                }
            }
        }

        let playing = self.phase == GamePhase::Playing && !self.lost;
        if playing {
            self.accrue_score(dt);
        }
        self.hud.update_controls(self.player.is_flipped(), input.vertical);

        if let Some(decision) = self.spawner.try_spawn_tick(dt) {
            self.events.push(GameEvent::Spawned(decision));
        }
        self.spawner.advance_obstacles(dt);
        self.spawner.despawn_past(self.settings.despawn_x);

        if playing {
            let baseline = self.settings.spawner.baseline_y;
            let offset = self.settings.spawner.lane_offset;
            let (floor, ceiling) = (baseline - offset, baseline + offset);
            self.player.step(dt, self.gravity, floor, ceiling);
            if let Some(hit) = self.player.first_hit(self.spawner.obstacles()) {
                log::debug!("Player hit obstacle {}", hit.id);
                self.lose_game();
            }
        }
    }

    fn accrue_score(&mut self, dt: f32) {
        self.score += self.settings.score_per_second * dt;
        self.hud.score = self.score;
        if self.high_score.is_beaten_by(self.score) {
            self.hud.breaking_high_score = true;
            self.hud.high_score = self.score;
        }
    }
}
