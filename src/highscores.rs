//! Persisted best score
//!
//! A single float under the `"highscore"` key. A fresh install reads as
//! 0.1 so the first scoring tick of the first run already counts as a new
//! record.

use crate::error::StoreError;
use crate::persistence::KeyValueStore;

/// Storage key
pub const HIGH_SCORE_KEY: &str = "highscore";

/// Value used when nothing has been stored yet
pub const DEFAULT_HIGH_SCORE: f32 = 0.1;

/// Best score as loaded from (and written back to) the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighScore {
    pub best: f32,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            best: DEFAULT_HIGH_SCORE,
        }
    }
}

impl HighScore {
    /// Read the stored best, falling back to the default
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get_f32(HIGH_SCORE_KEY) {
            Some(best) => {
                log::info!("Loaded high score {:.1}", best);
                Self { best }
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        }
    }

    /// Pick up a higher value from the store without dropping a best this
    /// session could not persist
    pub fn refresh(&mut self, store: &dyn KeyValueStore) {
        if let Some(stored) = store.get_f32(HIGH_SCORE_KEY) {
            self.best = self.best.max(stored);
        }
    }

    /// Check if a score beats the stored best
    pub fn is_beaten_by(&self, score: f32) -> bool {
        score > self.best
    }

    /// Persist `score` if it beats the best. Returns whether it did.
    ///
    /// The in-memory best is updated even when the write fails, so the rest
    /// of the session still shows the right record.
    pub fn record(&mut self, store: &mut dyn KeyValueStore, score: f32) -> Result<bool, StoreError> {
        if !self.is_beaten_by(score) {
            return Ok(false);
        }
        self.best = score;
        store.set_f32(HIGH_SCORE_KEY, score)?;
        log::info!("High score saved ({:.1})", score);
        Ok(true)
    }
}
