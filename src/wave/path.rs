//! Path sampling: turns the current wave state into a polyline

use glam::Vec2;
use rand::Rng;

use super::state::{ModInputs, WaveState};
use crate::consts::*;

/// Base sine term of the wave at a given x
#[inline]
pub fn base_offset(amplitude: f32, phase: f32, frequency: f32, x: f32) -> f32 {
    amplitude * ((x + phase) * frequency / 10.0).sin()
}

/// Extra vertical offset from the modulation sources at a given x.
///
/// Zero unless the main toggle is on; each sub-term is likewise zero
/// unless its own toggle is on. `span` runs negative across the whole
/// sweep and `%` is the truncating float remainder, so the sub-terms
/// shear as x approaches the right edge.
fn modulation_offset(state: &mut WaveState, mods: ModInputs, x: f32, width: f32) -> f32 {
    if !mods.main {
        return 0.0;
    }
    let span = x - width;
    let one = if mods.one {
        (MOD_SOURCE_X % span).sin()
    } else {
        0.0
    };
    let two = if mods.two {
        (MOD_SOURCE_Y % span).sin()
    } else {
        0.0
    };
    let three = if mods.three {
        (MOD_SOURCE_X * MOD_SOURCE_Y) % span - state.phase
    } else {
        0.0
    };
    let jitter = state.rng_mut().random::<f32>();
    MOD_GAIN * (one.sin() + two.sin() + jitter * three.sin())
}

/// Sample one frame's polyline: `NUM_POINTS` evenly spaced vertices
/// across the canvas width, centered on the canvas midline.
pub fn sample_wave(state: &mut WaveState, mods: ModInputs, width: f32, height: f32) -> Vec<Vec2> {
    let step = width / NUM_POINTS as f32;
    let mid = height / 2.0;
    let amplitude = state.amplitude.value;
    let frequency = state.frequency.value;
    let phase = state.phase;

    (0..NUM_POINTS)
        .map(|i| {
            let x = i as f32 * step;
            let y = mid
                + modulation_offset(state, mods, x, width)
                + base_offset(amplitude, phase, frequency, x);
            Vec2::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 360.0;

    #[test]
    fn test_baseline_matches_closed_form() {
        let mut wave = WaveState::new(123);
        for _ in 0..25 {
            wave.step();
        }
        let amplitude = wave.amplitude.value;
        let frequency = wave.frequency.value;
        let phase = wave.phase;

        let samples = sample_wave(&mut wave, ModInputs::default(), WIDTH, HEIGHT);
        assert_eq!(samples.len(), NUM_POINTS);
        for (i, point) in samples.iter().enumerate() {
            let x = i as f32 * WIDTH / NUM_POINTS as f32;
            assert_eq!(point.x, x);
            assert_eq!(
                point.y,
                HEIGHT / 2.0 + amplitude * ((x + phase) * frequency / 10.0).sin()
            );
        }
    }

    #[test]
    fn test_sub_terms_gated_by_main() {
        let mut a = WaveState::new(5);
        let mut b = WaveState::new(5);
        let all_but_main = ModInputs {
            main: false,
            one: true,
            two: true,
            three: true,
        };

        let plain = sample_wave(&mut a, ModInputs::default(), WIDTH, HEIGHT);
        let gated = sample_wave(&mut b, all_but_main, WIDTH, HEIGHT);
        assert_eq!(plain, gated);
    }

    #[test]
    fn test_modulation_perturbs_the_path() {
        let mut a = WaveState::new(5);
        let mut b = WaveState::new(5);
        let mods = ModInputs {
            main: true,
            one: true,
            two: false,
            three: false,
        };

        let plain = sample_wave(&mut a, ModInputs::default(), WIDTH, HEIGHT);
        let modulated = sample_wave(&mut b, mods, WIDTH, HEIGHT);
        assert_ne!(plain, modulated);
        assert!(modulated.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn test_same_seed_same_modulated_path() {
        let mods = ModInputs {
            main: true,
            one: true,
            two: true,
            three: true,
        };
        let mut a = WaveState::new(77);
        let mut b = WaveState::new(77);
        assert_eq!(
            sample_wave(&mut a, mods, WIDTH, HEIGHT),
            sample_wave(&mut b, mods, WIDTH, HEIGHT)
        );
    }
}
