//! Canvas-2D drawing for both page components
//!
//! The simulations never draw; these wrappers own the canvas lookups and
//! tolerate a missing surface by skipping the frame.

pub mod game;
pub mod wave;

pub use game::GameCanvas;
pub use wave::WaveCanvas;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// 2D context of a canvas, or `None` when the surface is unusable
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}
