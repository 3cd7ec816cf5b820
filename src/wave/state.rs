//! Wave state: bounded random walks, phase drift, modulation inputs

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Travel direction of a bounded quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

/// A value that random-walks between two bounds, reversing at each end.
///
/// Rising adds a random fraction of the step, falling subtracts the full
/// step; the value never leaves `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct BoundedWalk {
    pub value: f32,
    pub direction: Direction,
    min: f32,
    max: f32,
    step: f32,
}

impl BoundedWalk {
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            value: value.clamp(min, max),
            direction: Direction::Rising,
            min,
            max,
            step,
        }
    }

    /// Advance one frame. A frame that finds the value at its bound only
    /// flips the direction; movement resumes the frame after.
    pub fn advance(&mut self, rng: &mut Pcg32) {
        match self.direction {
            Direction::Rising => {
                if self.value >= self.max {
                    self.direction = Direction::Falling;
                } else {
                    self.value = (self.value + self.step * rng.random::<f32>()).min(self.max);
                }
            }
            Direction::Falling => {
                if self.value <= self.min {
                    self.direction = Direction::Rising;
                } else {
                    self.value = (self.value - self.step).max(self.min);
                }
            }
        }
    }
}

/// Which modulation terms contribute to the wave's vertical offset.
///
/// Supplied by the page each frame; the simulation never retains it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModInputs {
    /// Master switch; without it no modulation term contributes
    pub main: bool,
    pub one: bool,
    pub two: bool,
    pub three: bool,
}

/// Complete wave state, advanced once per animation frame
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Unbounded; drifts forward with occasional backwards jolts
    pub phase: f32,
    pub amplitude: BoundedWalk,
    pub frequency: BoundedWalk,
    rng: Pcg32,
}

impl WaveState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: PHASE_INITIAL,
            amplitude: BoundedWalk::new(AMP_INITIAL, AMP_MIN, AMP_MAX, AMP_STEP),
            frequency: BoundedWalk::new(FREQ_INITIAL, FREQ_MIN, FREQ_MAX, FREQ_STEP),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance amplitude, frequency and phase by one frame
    pub fn step(&mut self) {
        self.amplitude.advance(&mut self.rng);
        self.frequency.advance(&mut self.rng);
        if self.rng.random::<f32>() < PHASE_BACKTRACK_CHANCE {
            self.phase -= PHASE_BACKTRACK;
        } else {
            self.phase += PHASE_STEP;
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_walk_flips_at_max() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut walk = BoundedWalk::new(10.0, 0.0, 10.0, 1.0);
        assert_eq!(walk.direction, Direction::Rising);

        walk.advance(&mut rng);
        assert_eq!(walk.direction, Direction::Falling);
        assert_eq!(walk.value, 10.0);

        walk.advance(&mut rng);
        assert_eq!(walk.value, 9.0);
    }

    #[test]
    fn test_walk_flips_at_min() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut walk = BoundedWalk::new(0.0, 0.0, 10.0, 1.0);
        walk.direction = Direction::Falling;

        walk.advance(&mut rng);
        assert_eq!(walk.direction, Direction::Rising);
        assert_eq!(walk.value, 0.0);
    }

    #[test]
    fn test_initial_value_clamped() {
        let walk = BoundedWalk::new(50.0, 0.0, 10.0, 1.0);
        assert_eq!(walk.value, 10.0);
    }

    #[test]
    fn test_phase_advances_every_step() {
        let mut wave = WaveState::new(7);
        let before = wave.phase;
        wave.step();
        assert_ne!(wave.phase, before);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = WaveState::new(99);
        let mut b = WaveState::new(99);
        for _ in 0..200 {
            a.step();
            b.step();
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.amplitude.value, b.amplitude.value);
        assert_eq!(a.frequency.value, b.frequency.value);
    }

    proptest! {
        #[test]
        fn walks_stay_bounded(seed in any::<u64>(), steps in 0usize..500) {
            let mut wave = WaveState::new(seed);
            for _ in 0..steps {
                wave.step();
                prop_assert!((AMP_MIN..=AMP_MAX).contains(&wave.amplitude.value));
                prop_assert!((FREQ_MIN..=FREQ_MAX).contains(&wave.frequency.value));
            }
        }
    }
}
