//! Wavecat - animated canvases for a landing page
//!
//! Core modules:
//! - `wave`: sine-wave backdrop simulation (bounded random walks, modulation)
//! - `game`: cat-runner mini-game simulation (physics, obstacles, collisions)
//! - `frame`: animation-frame handle with deterministic cancellation
//! - `render`: canvas-2D drawing for both components
//! - `settings`: mount-time page configuration

pub mod game;
pub mod settings;
pub mod wave;

#[cfg(target_arch = "wasm32")]
pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use settings::Settings;

/// Fixed tunables for both animations
pub mod consts {
    /// Samples per wave sweep across the canvas width
    pub const NUM_POINTS: usize = 5000;
    /// X coordinate the stroked path is anchored at, just off-canvas
    pub const WAVE_ANCHOR_X: f32 = -4.0;

    /// Wave amplitude walk (pixels)
    pub const AMP_INITIAL: f32 = 40.0;
    pub const AMP_MIN: f32 = 10.0;
    pub const AMP_MAX: f32 = 75.0;
    pub const AMP_STEP: f32 = 0.5;

    /// Wave frequency walk (scaled by 1/10 in the sine argument)
    pub const FREQ_INITIAL: f32 = 0.1;
    pub const FREQ_MIN: f32 = 0.05;
    pub const FREQ_MAX: f32 = 0.3;
    pub const FREQ_STEP: f32 = 0.001;

    /// Phase drift per frame, with an occasional backwards jolt
    pub const PHASE_INITIAL: f32 = 0.0;
    pub const PHASE_STEP: f32 = 1.0;
    pub const PHASE_BACKTRACK: f32 = 5.0;
    pub const PHASE_BACKTRACK_CHANCE: f32 = 0.01;

    /// Fixed modulation source point; the terms never track the pointer
    pub const MOD_SOURCE_X: f32 = 100.0;
    pub const MOD_SOURCE_Y: f32 = 100.0;
    /// Gain applied to the combined modulation terms
    pub const MOD_GAIN: f32 = 10.0;

    /// Downward acceleration per frame (pixels/frame^2)
    pub const GRAVITY: f32 = 0.5;
    /// Launch velocity of a jump; negative is upward
    pub const JUMP_FORCE: f32 = -12.0;
    /// Horizontal scroll speed of obstacles (pixels/frame)
    pub const GAME_SPEED: f32 = 5.0;

    /// Cat box and its fixed horizontal slot
    pub const CAT_WIDTH: f32 = 50.0;
    pub const CAT_HEIGHT: f32 = 40.0;
    pub const CAT_X: f32 = 50.0;

    /// Game field dimensions; the baseline is the top of the ground
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 300.0;
    pub const FIELD_BASELINE: f32 = 200.0;
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Obstacle boxes; pits are wider and sunk into the ground
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 20.0;
    pub const PIT_WIDTH: f32 = 80.0;
    pub const PIT_HEIGHT: f32 = 20.0;

    /// Obstacles enter at the right edge and are dropped past the left
    pub const SPAWN_X: f32 = 800.0;
    pub const DESPAWN_X: f32 = -100.0;
    /// Wall-clock interval between spawns (frame-rate independent)
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
}
