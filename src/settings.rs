//! Game tuning
//!
//! Loaded once at startup from JSON. Any field may be omitted and falls back
//! to its default. `validate` runs before a session is built so bad tuning
//! fails fast instead of surfacing mid-run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_INTER_ARRIVAL;
use crate::error::ConfigError;
use crate::sim::curve::KeyframeCurve;

/// Obstacle spawning and difficulty ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerSettings {
    /// Horizontal spawn position (right edge of the play field)
    pub spawn_x: f32,
    /// Vertical center line between the two lanes
    pub baseline_y: f32,
    /// Distance from baseline to the floor/ceiling the lanes sit on
    pub lane_offset: f32,
    /// Probability of a top+bottom pair once the ease-in window is over
    pub twin_obstacle_chance: f32,
    /// Opening window where every obstacle goes to the bottom lane
    pub ease_in_secs: f32,
    /// Lower bound on sampled inter-arrival time, at least `MIN_INTER_ARRIVAL`
    pub min_inter_arrival: f32,

    // === Curves (elapsed seconds -> value) ===
    /// Mean inter-arrival time
    pub frequency_mean: KeyframeCurve,
    /// Inter-arrival standard deviation
    pub frequency_std_dev: KeyframeCurve,
    /// Obstacle edge length
    pub size: KeyframeCurve,
    /// Leftward obstacle speed
    pub speed: KeyframeCurve,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            spawn_x: 12.0,
            baseline_y: 0.0,
            lane_offset: 4.0,
            twin_obstacle_chance: 0.15,
            ease_in_secs: 3.0,
            min_inter_arrival: 0.2,

            frequency_mean: KeyframeCurve::ramp(0.0, 1.6, 90.0, 0.65),
            frequency_std_dev: KeyframeCurve::ramp(0.0, 0.45, 90.0, 0.2),
            size: KeyframeCurve::ramp(0.0, 1.0, 90.0, 1.8),
            speed: KeyframeCurve::ramp(0.0, 6.0, 90.0, 13.0),
        }
    }
}

impl SpawnerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.frequency_mean.validate("frequency_mean")?;
        self.frequency_std_dev.validate("frequency_std_dev")?;
        self.size.validate("size")?;
        self.speed.validate("speed")?;

        if !(0.0..=1.0).contains(&self.twin_obstacle_chance) {
            return Err(ConfigError::ChanceOutOfRange {
                field: "twin_obstacle_chance",
                value: self.twin_obstacle_chance,
            });
        }
        if self.min_inter_arrival.is_nan() || self.min_inter_arrival < MIN_INTER_ARRIVAL {
            return Err(ConfigError::BelowMinimum {
                field: "min_inter_arrival",
                value: self.min_inter_arrival,
                min: MIN_INTER_ARRIVAL,
            });
        }
        positive("lane_offset", self.lane_offset)?;
        non_negative("ease_in_secs", self.ease_in_secs)?;
        Ok(())
    }
}

/// Player body and gravity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Fixed horizontal position
    pub x: f32,
    /// Edge length of the player box
    pub size: f32,
    /// Gravity magnitude (units/s²)
    pub gravity: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            x: -6.0,
            size: 0.8,
            gravity: 40.0,
        }
    }
}

impl PlayerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.size", self.size)?;
        non_negative("player.gravity", self.gravity)?;
        Ok(())
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    /// Score gained per second survived
    pub score_per_second: f32,
    /// Obstacles entirely left of this x are removed
    pub despawn_x: f32,
    pub spawner: SpawnerSettings,
    pub player: PlayerSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            score_per_second: 10.0,
            despawn_x: -16.0,
            spawner: SpawnerSettings::default(),
            player: PlayerSettings::default(),
        }
    }
}

impl GameSettings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: origin.clone(),
            source,
        })?;
        let settings = Self::from_json(&json, &origin)?;
        log::info!("Loaded settings from {}", origin);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("score_per_second", self.score_per_second)?;
        if self.despawn_x >= self.player.x {
            return Err(ConfigError::DespawnAheadOfPlayer {
                despawn_x: self.despawn_x,
                player_x: self.player.x,
            });
        }
        self.spawner.validate()?;
        self.player.validate()?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this comparison too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::curve::Curve;

    #[test]
    fn test_defaults_are_valid() {
        GameSettings::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = GameSettings::from_json(
            r#"{ "seed": 7, "spawner": { "twin_obstacle_chance": 0.5 } }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.spawner.twin_obstacle_chance, 0.5);
        assert_eq!(s.spawner.ease_in_secs, 3.0);
        assert_eq!(s.score_per_second, 10.0);
    }

    #[test]
    fn test_curves_from_json() {
        let s = GameSettings::from_json(
            r#"{ "spawner": { "speed": [ {"time": 0, "value": 2}, {"time": 10, "value": 4} ] } }"#,
            "inline",
        )
        .unwrap();
        assert!((s.spawner.speed.evaluate(5.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_chance() {
        let err = GameSettings::from_json(
            r#"{ "spawner": { "twin_obstacle_chance": 1.5 } }"#,
            "inline",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ChanceOutOfRange {
                field: "twin_obstacle_chance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_curve() {
        let err =
            GameSettings::from_json(r#"{ "spawner": { "size": [] } }"#, "inline").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCurve { curve: "size" }));
        assert_eq!(err.to_string(), "curve `size` has no keyframes");
    }

    #[test]
    fn test_rejects_floor_below_hard_minimum() {
        for floor in ["0.0", "0.05", "0.19"] {
            let json = format!(r#"{{ "spawner": {{ "min_inter_arrival": {floor} }} }}"#);
            let err = GameSettings::from_json(&json, "inline").unwrap_err();
            assert!(matches!(
                err,
                ConfigError::BelowMinimum {
                    field: "min_inter_arrival",
                    min: MIN_INTER_ARRIVAL,
                    ..
                }
            ));
        }
        assert_eq!(
            GameSettings::from_json(r#"{ "spawner": { "min_inter_arrival": 0.05 } }"#, "inline")
                .unwrap_err()
                .to_string(),
            "`min_inter_arrival` must be at least 0.2, got 0.05"
        );
    }

    #[test]
    fn test_accepts_raised_floor() {
        let s = GameSettings::from_json(r#"{ "spawner": { "min_inter_arrival": 0.5 } }"#, "inline")
            .unwrap();
        assert_eq!(s.spawner.min_inter_arrival, 0.5);
    }

    #[test]
    fn test_rejects_despawn_ahead_of_player() {
        let err = GameSettings::from_json(r#"{ "despawn_x": -6.0 }"#, "inline").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DespawnAheadOfPlayer {
                despawn_x,
                player_x,
            } if despawn_x == -6.0 && player_x == -6.0
        ));
        assert_eq!(
            err.to_string(),
            "`despawn_x` (-6) must be behind `player.x` (-6)"
        );
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = GameSettings::from_json("{ not json", "tuning.json").unwrap_err();
        assert!(err.to_string().starts_with("invalid settings tuning.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameSettings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
