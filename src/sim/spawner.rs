//! Obstacle spawner
//!
//! Decides when, where, how big and how fast obstacles appear. Timing is a
//! Normal inter-arrival process whose mean and spread are curves over
//! elapsed time, so the run gets denser the longer the player survives.

use glam::Vec2;

use super::curve::Curve;
use super::obstacle::{Lane, LanePolicy, Obstacle};
use super::rng::GameRng;
use crate::consts::MIN_INTER_ARRIVAL;
use crate::settings::SpawnerSettings;

/// The four difficulty curves the spawner samples
pub struct SpawnCurves {
    pub frequency_mean: Box<dyn Curve>,
    pub frequency_std_dev: Box<dyn Curve>,
    pub size: Box<dyn Curve>,
    pub speed: Box<dyn Curve>,
}

impl SpawnCurves {
    pub fn from_settings(settings: &SpawnerSettings) -> Self {
        Self {
            frequency_mean: Box::new(settings.frequency_mean.clone()),
            frequency_std_dev: Box::new(settings.frequency_std_dev.clone()),
            size: Box::new(settings.size.clone()),
            speed: Box::new(settings.speed.clone()),
        }
    }
}

/// Spawn timing state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnSchedule {
    /// Seconds since the spawner was (re)started, always advancing
    pub elapsed: f32,
    /// Time accumulated toward the next spawn
    pub since_last_spawn: f32,
    /// Current inter-arrival threshold
    pub next_spawn_in: f32,
}

/// What a spawn tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnDecision {
    /// One obstacle in the given lane
    Single(Lane),
    /// One obstacle in each lane at the same x
    Twin,
}

pub struct Spawner {
    /// Master gate; nothing spawns while false
    pub spawn_obstacles: bool,
    settings: SpawnerSettings,
    curves: SpawnCurves,
    schedule: SpawnSchedule,
    rng: GameRng,
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Spawner {
    /// Spawner using the keyframe curves from `settings`
    pub fn new(settings: SpawnerSettings, seed: u64) -> Self {
        let curves = SpawnCurves::from_settings(&settings);
        Self::with_curves(settings, curves, seed)
    }

    /// Spawner with caller-supplied curves; the curve fields of `settings`
    /// are ignored.
    pub fn with_curves(settings: SpawnerSettings, curves: SpawnCurves, seed: u64) -> Self {
        let mut spawner = Self {
            spawn_obstacles: false,
            settings,
            curves,
            schedule: SpawnSchedule::default(),
            rng: GameRng::new(seed),
            obstacles: Vec::new(),
            next_id: 1,
        };
        spawner.reset_spawn_state();
        spawner
    }

    pub fn schedule(&self) -> &SpawnSchedule {
        &self.schedule
    }

    pub fn settings(&self) -> &SpawnerSettings {
        &self.settings
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Advance one simulation step.
    ///
    /// Elapsed time always advances. While spawning is enabled the
    /// accumulator advances too, and crossing the threshold yields exactly
    /// one spawn decision. Any overshoot carries into the next interval but
    /// a single call never spawns more than once, however large `dt` is.
    pub fn try_spawn_tick(&mut self, dt: f32) -> Option<SpawnDecision> {
        self.schedule.elapsed += dt;
        if !self.spawn_obstacles {
            return None;
        }

        self.schedule.since_last_spawn += dt;
        if self.schedule.since_last_spawn < self.schedule.next_spawn_in {
            return None;
        }

        self.schedule.since_last_spawn -= self.schedule.next_spawn_in;
        self.schedule.next_spawn_in = self.next_inter_arrival();

        let decision = self.spawn_decision();
        log::debug!(
            "Spawn at t={:.2}s: {:?}, next in {:.2}s",
            self.schedule.elapsed,
            decision,
            self.schedule.next_spawn_in
        );
        Some(decision)
    }

    /// Pick lanes for this spawn event and create the obstacles
    fn spawn_decision(&mut self) -> SpawnDecision {
        if self.schedule.elapsed < self.settings.ease_in_secs {
            self.spawn_obstacle(LanePolicy::Forced(Lane::Bottom));
            return SpawnDecision::Single(Lane::Bottom);
        }

        if self.rng.chance(self.settings.twin_obstacle_chance) {
            self.spawn_obstacle(LanePolicy::Forced(Lane::Top));
            self.spawn_obstacle(LanePolicy::Forced(Lane::Bottom));
            SpawnDecision::Twin
        } else {
            let obstacle = self.spawn_obstacle(LanePolicy::Random);
            SpawnDecision::Single(obstacle.lane)
        }
    }

    /// Create one obstacle sized and sped for the current elapsed time
    pub fn spawn_obstacle(&mut self, policy: LanePolicy) -> &Obstacle {
        let lane = match policy {
            LanePolicy::Forced(lane) => lane,
            LanePolicy::Random => {
                if self.rng.coin_flip() {
                    Lane::Top
                } else {
                    Lane::Bottom
                }
            }
        };

        let t = self.schedule.elapsed;
        let size = self.curves.size.evaluate(t).max(0.0);
        let speed = self.curves.speed.evaluate(t);
        let y = lane.center_y(self.settings.baseline_y, self.settings.lane_offset, size);

        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            lane,
            pos: Vec2::new(self.settings.spawn_x, y),
            size,
            vel: Vec2::new(-speed, 0.0),
        });
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Remove every live obstacle. Returns how many were removed.
    pub fn clear_obstacles(&mut self) -> usize {
        let count = self.obstacles.len();
        self.obstacles.clear();
        count
    }

    /// Scale the horizontal velocity of every live obstacle
    pub fn modify_obstacle_speed(&mut self, multiplier: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.vel.x *= multiplier;
        }
    }

    /// Zero the accumulator and draw a fresh threshold
    pub fn reset_spawn_state(&mut self) {
        self.schedule.since_last_spawn = 0.0;
        self.schedule.next_spawn_in = self.next_inter_arrival();
    }

    /// Full restart: no obstacles, elapsed back to zero, fresh schedule.
    /// Spawning stays gated by `spawn_obstacles`.
    pub fn restart(&mut self) {
        self.clear_obstacles();
        self.schedule.elapsed = 0.0;
        self.reset_spawn_state();
    }

    /// Sample an inter-arrival time for the current elapsed time.
    ///
    /// Box–Muller can go below the mean and even negative, so the result is
    /// floored at `min_inter_arrival`, and never below `MIN_INTER_ARRIVAL`
    /// whatever the settings say.
    pub fn next_inter_arrival(&mut self) -> f32 {
        let t = self.schedule.elapsed;
        let mean = self.curves.frequency_mean.evaluate(t);
        let std_dev = self.curves.frequency_std_dev.evaluate(t).max(0.0);
        let floor = MIN_INTER_ARRIVAL.max(self.settings.min_inter_arrival);
        self.rng.normal(mean, std_dev).max(floor)
    }

    /// Move every obstacle by its velocity
    pub fn advance_obstacles(&mut self, dt: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt);
        }
    }

    /// Drop obstacles that have fully left the play field
    pub fn despawn_past(&mut self, bound: f32) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_past(bound));
        before - self.obstacles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixed_curves(mean: f32, std_dev: f32) -> SpawnCurves {
        SpawnCurves {
            frequency_mean: Box::new(move |_: f32| mean),
            frequency_std_dev: Box::new(move |_: f32| std_dev),
            size: Box::new(|t: f32| 1.0 + t * 0.1),
            speed: Box::new(|_: f32| 5.0),
        }
    }

    fn spawner(twin_chance: f32, mean: f32, std_dev: f32, seed: u64) -> Spawner {
        let settings = SpawnerSettings {
            twin_obstacle_chance: twin_chance,
            ..Default::default()
        };
        let mut s = Spawner::with_curves(settings, fixed_curves(mean, std_dev), seed);
        s.spawn_obstacles = true;
        s
    }

    #[test]
    fn test_gated_spawner_never_spawns() {
        let mut s = spawner(0.0, 0.5, 0.0, 1);
        s.spawn_obstacles = false;
        for _ in 0..100 {
            assert_eq!(s.try_spawn_tick(1.0), None);
        }
        assert!(s.obstacles().is_empty());
        assert_eq!(s.schedule().elapsed, 100.0);
        assert_eq!(s.schedule().since_last_spawn, 0.0);
    }

    #[test]
    fn test_huge_dt_spawns_once() {
        let mut s = spawner(0.0, 0.5, 0.0, 1);
        assert_eq!(s.schedule().next_spawn_in, 0.5);
        let decision = s.try_spawn_tick(100.0);
        assert!(matches!(decision, Some(SpawnDecision::Single(_))));
        assert_eq!(s.obstacles().len(), 1);
        // Overshoot is carried, not dropped
        assert!((s.schedule().since_last_spawn - 99.5).abs() < 1e-4);
    }

    #[test]
    fn test_remainder_carries_forward() {
        let mut s = spawner(0.0, 0.5, 0.0, 1);
        assert_eq!(s.try_spawn_tick(0.3), None);
        assert!(s.try_spawn_tick(0.3).is_some());
        assert!((s.schedule().since_last_spawn - 0.1).abs() < 1e-6);
        // 0.1 carried + 0.4 reaches the next 0.5 threshold
        assert!(s.try_spawn_tick(0.4).is_some());
    }

    #[test]
    fn test_reset_then_zero_tick_never_spawns() {
        for seed in 0..50 {
            let mut s = spawner(0.5, 0.3, 2.0, seed);
            s.try_spawn_tick(5.0);
            s.reset_spawn_state();
            assert_eq!(s.schedule().since_last_spawn, 0.0);
            assert_eq!(s.try_spawn_tick(0.0), None);
        }
    }

    #[test]
    fn test_low_configured_floor_is_raised_to_minimum() {
        // Unvalidated settings still cannot spawn faster than the hard floor
        let settings = SpawnerSettings {
            min_inter_arrival: 0.05,
            ..Default::default()
        };
        let mut s = Spawner::with_curves(settings, fixed_curves(-5.0, 0.0), 1);
        for _ in 0..16 {
            assert_eq!(s.next_inter_arrival(), MIN_INTER_ARRIVAL);
        }
    }

    #[test]
    fn test_higher_configured_floor_wins() {
        let settings = SpawnerSettings {
            min_inter_arrival: 0.75,
            ..Default::default()
        };
        let mut s = Spawner::with_curves(settings, fixed_curves(0.1, 0.0), 1);
        assert_eq!(s.next_inter_arrival(), 0.75);
    }

    #[test]
    fn test_ease_in_forces_bottom_lane() {
        for seed in 0..20 {
            let mut s = spawner(1.0, 0.2, 0.0, seed);
            // 0.2 s steps: spawns at 0.2, 0.4, ... all before 3 s
            for _ in 0..14 {
                s.try_spawn_tick(0.2);
            }
            assert!(s.schedule().elapsed < 3.0);
            assert!(!s.obstacles().is_empty());
            assert!(s.obstacles().iter().all(|o| o.lane == Lane::Bottom));
        }
    }

    #[test]
    fn test_twin_chance_one_spawns_pairs() {
        let mut s = spawner(1.0, 0.5, 0.0, 3);
        s.try_spawn_tick(3.0);
        s.clear_obstacles();
        s.reset_spawn_state();

        for _ in 0..10 {
            let before = s.obstacles().len();
            assert_eq!(s.try_spawn_tick(0.5), Some(SpawnDecision::Twin));
            let pair = &s.obstacles()[before..];
            assert_eq!(pair.len(), 2);
            assert_eq!(pair[0].lane, Lane::Top);
            assert_eq!(pair[1].lane, Lane::Bottom);
            assert_eq!(pair[0].pos.x, pair[1].pos.x);
        }
    }

    #[test]
    fn test_random_lane_uses_both_lanes() {
        let mut s = spawner(0.0, 0.5, 0.0, 11);
        s.try_spawn_tick(3.0);
        s.clear_obstacles();
        for _ in 0..200 {
            s.try_spawn_tick(0.5);
        }
        let top = s.obstacles().iter().filter(|o| o.lane == Lane::Top).count();
        assert_eq!(s.obstacles().len(), 200);
        assert!(top > 60 && top < 140, "top lane count {top}");
    }

    #[test]
    fn test_spawned_obstacle_uses_curves_at_elapsed_time() {
        let mut s = spawner(0.0, 10.0, 0.0, 1);
        s.try_spawn_tick(5.0);
        let o = s.spawn_obstacle(LanePolicy::Forced(Lane::Top)).clone();
        assert!((o.size - 1.5).abs() < 1e-6);
        assert_eq!(o.vel, Vec2::new(-5.0, 0.0));
        assert_eq!(o.pos.x, s.settings().spawn_x);
        let settings = s.settings();
        assert!((o.pos.y + o.size / 2.0 - (settings.baseline_y + settings.lane_offset)).abs() < 1e-6);
    }

    #[test]
    fn test_modify_speed_only_touches_x() {
        let mut s = spawner(0.0, 10.0, 0.0, 1);
        s.spawn_obstacle(LanePolicy::Forced(Lane::Top));
        s.spawn_obstacle(LanePolicy::Forced(Lane::Bottom));
        s.obstacles[0].vel = Vec2::new(-7.5, 2.0);
        s.obstacles[1].vel = Vec2::new(3.0, -1.25);

        s.modify_obstacle_speed(0.0);
        assert_eq!(s.obstacles()[0].vel, Vec2::new(0.0, 2.0));
        assert_eq!(s.obstacles()[1].vel, Vec2::new(0.0, -1.25));
    }

    #[test]
    fn test_clear_and_restart() {
        let mut s = spawner(0.0, 0.5, 0.0, 1);
        for _ in 0..10 {
            s.try_spawn_tick(0.5);
        }
        assert_eq!(s.clear_obstacles(), 10);
        s.try_spawn_tick(0.25);
        s.restart();
        assert!(s.obstacles().is_empty());
        assert_eq!(s.schedule().elapsed, 0.0);
        assert_eq!(s.schedule().since_last_spawn, 0.0);
        assert!(s.spawn_obstacles);
    }

    #[test]
    fn test_obstacles_move_and_despawn() {
        let mut s = spawner(0.0, 10.0, 0.0, 1);
        s.spawn_obstacle(LanePolicy::Forced(Lane::Bottom));
        s.advance_obstacles(1.0);
        assert_eq!(s.obstacles()[0].pos.x, s.settings().spawn_x - 5.0);
        assert_eq!(s.despawn_past(-100.0), 0);
        assert_eq!(s.despawn_past(100.0), 1);
        assert!(s.obstacles().is_empty());
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut s = Spawner::new(SpawnerSettings::default(), seed);
            s.spawn_obstacles = true;
            let mut decisions = Vec::new();
            for _ in 0..600 {
                decisions.push(s.try_spawn_tick(1.0 / 60.0));
            }
            (decisions, s.obstacles().to_vec())
        };
        assert_eq!(run(99), run(99));
    }

    proptest! {
        #[test]
        fn prop_inter_arrival_respects_floor(
            mean in -20.0f32..20.0,
            std_dev in -10.0f32..10.0,
            seed in any::<u64>(),
        ) {
            let mut s = spawner(0.0, mean, std_dev, seed);
            for _ in 0..32 {
                prop_assert!(s.next_inter_arrival() >= MIN_INTER_ARRIVAL);
            }
        }

        #[test]
        fn prop_at_most_one_decision_per_tick(
            dt in 0.0f32..1000.0,
            mean in -1.0f32..2.0,
            seed in any::<u64>(),
        ) {
            let mut s = spawner(0.0, mean, 0.5, seed);
            s.try_spawn_tick(3.0);
            s.clear_obstacles();
            let spawned = s.try_spawn_tick(dt).map_or(0, |_| 1);
            prop_assert!(s.obstacles().len() <= 1);
            prop_assert_eq!(s.obstacles().len(), spawned);
        }
    }
}
