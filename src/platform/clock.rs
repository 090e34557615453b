//! Fixed-timestep frame clock

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame fed into the accumulator, so a stalled tab does not
/// replay seconds of simulation at once
const MAX_FRAME_DT: f32 = 0.1;

/// Splits variable frame times into `SIM_DT` steps
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    /// Add a frame of `dt` seconds and return how many `SIM_DT` steps to
    /// run, at most `MAX_SUBSTEPS`. Leftover time carries to the next frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    pub fn leftover(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
        assert!((clock.leftover() - SIM_DT * 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedStep::default();
        // A 5 s stall replays only MAX_FRAME_DT worth of steps
        let steps = clock.advance(5.0);
        assert!((5..=6).contains(&steps), "steps {steps}");
        assert!(steps <= MAX_SUBSTEPS);
        assert!(clock.leftover() < SIM_DT);
    }

    #[test]
    fn test_negative_frame_is_ignored() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.leftover(), 0.0);
    }
}
