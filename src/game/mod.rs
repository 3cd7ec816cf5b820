//! Cat-runner simulation
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Wall-clock spawn timing passed in by the caller
//! - Stable obstacle order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, cat_hitbox, obstacle_hitbox};
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind};
pub use tick::{TickInput, tick};
