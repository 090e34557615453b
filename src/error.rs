//! Error types for configuration loading and high score storage

use std::fmt;

/// Startup-time configuration problems.
///
/// Everything here is detected before the first frame runs; per-frame code
/// never has to deal with a missing curve or an out-of-range tuning value.
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    Io { path: String, source: std::io::Error },
    /// Settings file is not valid JSON for `GameSettings`
    Parse { path: String, source: serde_json::Error },
    /// A curve has no keyframes to evaluate
    EmptyCurve { curve: &'static str },
    /// Curve keyframes must be sorted by strictly increasing time
    UnsortedCurve { curve: &'static str, index: usize },
    /// A curve keyframe holds NaN or infinity
    NonFiniteCurve { curve: &'static str, index: usize },
    /// A probability outside [0, 1]
    ChanceOutOfRange { field: &'static str, value: f32 },
    /// A value that must be strictly positive
    NonPositive { field: &'static str, value: f32 },
    /// A value that must not be negative
    Negative { field: &'static str, value: f32 },
    /// A value under its hard lower bound
    BelowMinimum {
        field: &'static str,
        value: f32,
        min: f32,
    },
    /// Obstacles would be removed before they reach the player
    DespawnAheadOfPlayer { despawn_x: f32, player_x: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read settings {path}: {source}"),
            Self::Parse { path, source } => write!(f, "invalid settings {path}: {source}"),
            Self::EmptyCurve { curve } => write!(f, "curve `{curve}` has no keyframes"),
            Self::UnsortedCurve { curve, index } => write!(
                f,
                "curve `{curve}` keyframe {index} is not after the previous keyframe"
            ),
            Self::NonFiniteCurve { curve, index } => {
                write!(f, "curve `{curve}` keyframe {index} is not finite")
            }
            Self::ChanceOutOfRange { field, value } => {
                write!(f, "`{field}` must be within 0..=1, got {value}")
            }
            Self::NonPositive { field, value } => {
                write!(f, "`{field}` must be greater than 0, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "`{field}` must not be negative, got {value}")
            }
            Self::BelowMinimum { field, value, min } => {
                write!(f, "`{field}` must be at least {min}, got {value}")
            }
            Self::DespawnAheadOfPlayer {
                despawn_x,
                player_x,
            } => write!(
                f,
                "`despawn_x` ({despawn_x}) must be behind `player.x` ({player_x})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Durable key-value store failures
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    /// Browser storage is missing or rejected the write
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store i/o error: {e}"),
            Self::Serialize(e) => write!(f, "store encoding error: {e}"),
            Self::Unavailable(reason) => write!(f, "store unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}
