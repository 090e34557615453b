//! Deterministic simulation module
//!
//! Spawning, obstacles and the player body. This module must stay pure:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod curve;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod spawner;

pub use curve::{Curve, Keyframe, KeyframeCurve};
pub use obstacle::{Lane, LanePolicy, Obstacle};
pub use player::Player;
pub use rng::GameRng;
pub use spawner::{SpawnCurves, SpawnDecision, SpawnSchedule, Spawner};
