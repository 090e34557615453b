//! Obstacle entities and lane placement

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the two spawn rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Top,
    Bottom,
}

impl Lane {
    /// Vertical center for an obstacle of `size` so its outer edge sits on
    /// the lane boundary `lane_offset` away from the baseline.
    pub fn center_y(self, baseline: f32, lane_offset: f32, size: f32) -> f32 {
        let half = size * 0.5;
        match self {
            Lane::Top => baseline + lane_offset - half,
            Lane::Bottom => baseline - lane_offset + half,
        }
    }
}

/// How the spawner picks a lane for one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePolicy {
    Forced(Lane),
    /// 50/50 coin flip
    Random,
}

/// A square obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: Lane,
    /// Center position
    pub pos: Vec2,
    /// Edge length (uniform scale)
    pub size: f32,
    pub vel: Vec2,
}

impl Obstacle {
    /// Integrate position by velocity
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.size * 0.5)
    }

    /// True once the whole obstacle is left of `bound`
    pub fn is_past(&self, bound: f32) -> bool {
        self.pos.x + self.size * 0.5 < bound
    }

    /// Axis-aligned overlap with a box centered at `center`
    pub fn overlaps_box(&self, center: Vec2, half_extents: Vec2) -> bool {
        let delta = (self.pos - center).abs();
        let reach = self.half_extents() + half_extents;
        delta.x < reach.x && delta.y < reach.y
    }
}
