//! Gravity Runner - a gravity-flipping endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawner, obstacles, player body)
//! - `manager`: Session lifecycle, scoring and high score bookkeeping
//! - `hud`: Panel visibility and displayed values
//! - `persistence`: Durable key-value storage backends
//! - `platform`: Browser/native logging and input helpers
//! - `settings`: Data-driven game tuning
//! - `web`: wasm-bindgen export for the browser build

pub mod error;
pub mod highscores;
pub mod hud;
pub mod manager;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{ConfigError, StoreError};
pub use highscores::HighScore;
pub use manager::{GameEvent, GameManager, GamePhase};
pub use settings::GameSettings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Shortest gap between two spawns, in seconds. Config can raise it,
    /// never lower it.
    pub const MIN_INTER_ARRIVAL: f32 = 0.2;
}
