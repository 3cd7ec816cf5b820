//! Wave backdrop simulation
//!
//! Pure and deterministic given its seed:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! One `step` per animation frame advances the bounded walks and phase;
//! `sample_wave` turns the current state into a polyline for the canvas.

pub mod path;
pub mod state;

pub use path::{base_offset, sample_wave};
pub use state::{BoundedWalk, Direction, ModInputs, WaveState};
