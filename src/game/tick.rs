//! Per-frame game update
//!
//! One `tick` per animation frame while a session is running. `now_ms`
//! is the caller's wall clock (animation-frame timestamps in the
//! browser, a simulated clock in tests); it only drives spawn cadence,
//! physics integrates per frame.

use super::collision::{cat_hitbox, obstacle_hitbox};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin a new session (honored in Idle/GameOver)
    pub start: bool,
    /// Launch the cat (honored in Playing, on the ground)
    pub jump: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if input.start {
        match state.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                state.reset(now_ms);
                return;
            }
            GamePhase::Playing => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    // Jumps only launch from the ground; airborne triggers are ignored
    if input.jump && state.cat_position == 0.0 && !state.jumping {
        state.cat_velocity = JUMP_FORCE;
        state.jumping = true;
    }

    // Integrate: up is negative velocity, the ground clamps
    state.cat_position -= state.cat_velocity;
    if state.cat_position < 0.0 {
        state.cat_position = 0.0;
        state.cat_velocity = 0.0;
        state.jumping = false;
    }
    state.cat_velocity += GRAVITY;

    // Scroll, dropping obstacles fully past the left edge
    for obstacle in &mut state.obstacles {
        obstacle.x -= GAME_SPEED;
    }
    state.obstacles.retain(|o| o.x > DESPAWN_X);

    // First hit in spawn order ends the session and freezes the rest of
    // the frame: no spawn, no score
    let cat = cat_hitbox(state.cat_position);
    for obstacle in &state.obstacles {
        if cat.overlaps(&obstacle_hitbox(obstacle.kind, obstacle.x)) {
            state.collided = true;
            state.phase = GamePhase::GameOver;
            return;
        }
    }

    if now_ms - state.last_spawn_ms > SPAWN_INTERVAL_MS {
        state.spawn_obstacle(now_ms);
    }

    state.score += 1;
}
