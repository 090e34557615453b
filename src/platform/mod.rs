//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Input events (level → edge conversion)
//! - Fixed-timestep frame clock

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{ButtonState, FrameInput};

/// Install the platform logger. Call once at startup.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Install the platform logger. Call once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}
