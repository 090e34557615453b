//! Player body
//!
//! The runner stays at a fixed x and only moves vertically. Jumping flips
//! which way gravity pulls it, so it falls onto either the floor or the
//! ceiling lane.

use glam::Vec2;

use super::obstacle::Obstacle;
use crate::settings::PlayerSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// +1 falls toward the floor, -1 toward the ceiling
    gravity_sign: f32,
}

impl Player {
    pub fn new(settings: &PlayerSettings, baseline_y: f32) -> Self {
        Self {
            pos: Vec2::new(settings.x, baseline_y),
            vel: Vec2::ZERO,
            size: settings.size,
            gravity_sign: 1.0,
        }
    }

    pub fn gravity_sign(&self) -> f32 {
        self.gravity_sign
    }

    /// True when gravity currently pulls the player toward the ceiling
    pub fn is_flipped(&self) -> bool {
        self.gravity_sign < 0.0
    }

    pub fn flip_gravity(&mut self) {
        self.gravity_sign = -self.gravity_sign;
    }

    /// Back to falling toward the floor
    pub fn reset_gravity(&mut self) {
        self.gravity_sign = 1.0;
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.size * 0.5)
    }

    /// Integrate under `gravity` (already in canonical downward form) and
    /// keep the body between `floor` and `ceiling`.
    pub fn step(&mut self, dt: f32, gravity: Vec2, floor: f32, ceiling: f32) {
        self.vel += gravity * self.gravity_sign * dt;
        self.pos += self.vel * dt;

        let half = self.size * 0.5;
        if self.pos.y - half <= floor {
            self.pos.y = floor + half;
            self.vel.y = self.vel.y.max(0.0);
        }
        if self.pos.y + half >= ceiling {
            self.pos.y = ceiling - half;
            self.vel.y = self.vel.y.min(0.0);
        }
    }

    /// First obstacle overlapping the player, if any
    pub fn first_hit<'a>(&self, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
        obstacles
            .iter()
            .find(|o| o.overlaps_box(self.pos, self.half_extents()))
    }
}
