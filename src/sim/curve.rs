//! Time-indexed tuning curves
//!
//! Difficulty ramps are data, not code. The spawner only ever asks a curve
//! for its value at the current elapsed time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A function of elapsed session time
pub trait Curve {
    fn evaluate(&self, time: f32) -> f32;
}

impl<F: Fn(f32) -> f32> Curve for F {
    fn evaluate(&self, time: f32) -> f32 {
        self(time)
    }
}

/// Single (time, value) control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear curve through sorted keyframes.
///
/// Times before the first keyframe hold the first value, times after the
/// last keyframe hold the last value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Flat curve
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)])
    }

    /// Straight ramp from `(t0, v0)` to `(t1, v1)`
    pub fn ramp(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        Self::new(vec![Keyframe::new(t0, v0), Keyframe::new(t1, v1)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Check the keyframes can be evaluated. `name` labels the error.
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.keys.is_empty() {
            return Err(ConfigError::EmptyCurve { curve: name });
        }
        for (index, key) in self.keys.iter().enumerate() {
            if !key.time.is_finite() || !key.value.is_finite() {
                return Err(ConfigError::NonFiniteCurve { curve: name, index });
            }
            if index > 0 && key.time <= self.keys[index - 1].time {
                return Err(ConfigError::UnsortedCurve { curve: name, index });
            }
        }
        Ok(())
    }
}

impl Curve for KeyframeCurve {
    fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        // NaN fails every comparison below; hold the first key for it
        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // First keyframe strictly after `time`; guaranteed in 1..len here
        let next = self.keys.partition_point(|k| k.time <= time);
        let a = self.keys[next - 1];
        let b = self.keys[next];
        let t = (time - a.time) / (b.time - a.time);
        a.value + (b.value - a.value) * t
    }
}
