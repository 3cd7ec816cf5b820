//! Wave backdrop canvas

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use super::context_2d;
use crate::consts::*;
use crate::settings::Settings;

/// Viewport-wide canvas the wave polyline is stroked onto
pub struct WaveCanvas {
    canvas: Option<HtmlCanvasElement>,
    stroke_color: String,
    line_width: f64,
}

impl WaveCanvas {
    /// Look up the canvas element. A missing element is tolerated; every
    /// subsequent draw becomes a no-op.
    pub fn mount(document: &Document, id: &str, settings: &Settings) -> Self {
        let canvas = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        if canvas.is_none() {
            log::warn!("wave canvas #{id} not found, backdrop disabled");
        }
        Self {
            canvas,
            stroke_color: settings.wave_color.clone(),
            line_width: f64::from(settings.wave_line_width),
        }
    }

    /// Current pixel size of the backing surface, zero when absent
    pub fn size(&self) -> Vec2 {
        self.canvas
            .as_ref()
            .map(|c| Vec2::new(c.width() as f32, c.height() as f32))
            .unwrap_or(Vec2::ZERO)
    }

    /// Match the canvas to the viewport: full width, bottom half height
    pub fn resize_to_viewport(&self, window: &Window) {
        let Some(canvas) = self.canvas.as_ref() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height((height / 2.0) as u32);
    }

    /// Clear the surface and stroke one frame's polyline. No-op without
    /// a usable surface.
    pub fn draw(&self, samples: &[Vec2]) {
        let Some(canvas) = self.canvas.as_ref() else {
            return;
        };
        let Some(ctx) = context_2d(canvas) else {
            return;
        };

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        ctx.clear_rect(0.0, 0.0, width, height);

        ctx.begin_path();
        ctx.move_to(f64::from(WAVE_ANCHOR_X), height / 2.0);
        for point in samples {
            ctx.line_to(f64::from(point.x), f64::from(point.y));
        }
        ctx.set_line_width(self.line_width);
        ctx.set_stroke_style_str(&self.stroke_color);
        ctx.stroke();
    }
}
