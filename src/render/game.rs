//! Game field canvas
//!
//! Draws in the same coordinate space the collision boxes use, so what
//! the player sees is exactly what the physics tests.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use super::context_2d;
use crate::consts::*;
use crate::game::{Aabb, GameState, cat_hitbox, obstacle_hitbox};

const SKY_COLOR: &str = "#87ceeb";
const GROUND_COLOR: &str = "#8b4513";
const CAT_COLOR: &str = "#ffa500";
const CAT_HIT_COLOR: &str = "#ff6b6b";
const LABEL_COLOR: &str = "#000000";

/// Fixed-size canvas the game field is drawn onto
pub struct GameCanvas {
    canvas: Option<HtmlCanvasElement>,
}

impl GameCanvas {
    /// Look up the canvas element. A missing element is tolerated; every
    /// subsequent draw becomes a no-op.
    pub fn mount(document: &Document, id: &str) -> Self {
        let canvas = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        if canvas.is_none() {
            log::warn!("game canvas #{id} not found, game hidden");
        }
        Self { canvas }
    }

    /// Redraw the whole field. No-op without a usable surface.
    pub fn draw(&self, state: &GameState) {
        let Some(canvas) = self.canvas.as_ref() else {
            return;
        };
        let Some(ctx) = context_2d(canvas) else {
            return;
        };

        // Sky and ground
        ctx.set_fill_style_str(SKY_COLOR);
        ctx.fill_rect(0.0, 0.0, f64::from(FIELD_WIDTH), f64::from(FIELD_HEIGHT));
        ctx.set_fill_style_str(GROUND_COLOR);
        ctx.fill_rect(
            0.0,
            f64::from(FIELD_BASELINE),
            f64::from(FIELD_WIDTH),
            f64::from(FIELD_HEIGHT - FIELD_BASELINE),
        );

        // Obstacles in spawn order, labelled by kind
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("center");
        for obstacle in &state.obstacles {
            let hitbox = obstacle_hitbox(obstacle.kind, obstacle.x);
            ctx.set_fill_style_str(obstacle.kind.color());
            fill_box(&ctx, &hitbox);
            ctx.set_fill_style_str(LABEL_COLOR);
            let center_x = f64::from((hitbox.min.x + hitbox.max.x) / 2.0);
            let _ = ctx.fill_text(obstacle.kind.label(), center_x, f64::from(hitbox.min.y - 8.0));
        }

        // Cat, tinted on the collision frame
        let cat = cat_hitbox(state.cat_position);
        ctx.set_fill_style_str(if state.collided {
            CAT_HIT_COLOR
        } else {
            CAT_COLOR
        });
        fill_box(&ctx, &cat);
    }
}

fn fill_box(ctx: &web_sys::CanvasRenderingContext2d, aabb: &Aabb) {
    ctx.fill_rect(
        f64::from(aabb.min.x),
        f64::from(aabb.min.y),
        f64::from(aabb.max.x - aabb.min.x),
        f64::from(aabb.max.y - aabb.min.y),
    );
}
