// Renderer struct that wraps the canvas 2d context and turns the current
// field state into draw calls. It never mutates the field, so drawing the
// same state twice gives the same pixels.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::field::ParticleField;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Renderer {
    pub const LINK_LINE_WIDTH: f64 = 0.5;

    // On creation grabs the 2d context from the canvas. This is the only
    // point where a missing drawing surface is an error; after construction
    // every draw entry point just works against the held context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Renderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Renderer { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn clear_screen(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    // Each particle is a filled circle at its own translucent fill style.
    pub fn render_particles(&self, field: &ParticleField) {
        for particle in field.particles() {
            self.context
                .set_fill_style(&JsValue::from_str(&particle.color.to_css()));
            self.context.begin_path();
            if self
                .context
                .arc(
                    particle.pos[0],
                    particle.pos[1],
                    particle.radius,
                    0.0,
                    std::f64::consts::PI * 2.0,
                )
                .is_err()
            {
                continue;
            }
            self.context.close_path();
            self.context.fill();
        }
    }

    // Connecting lines between close pairs, fading out with distance.
    pub fn render_links(&self, field: &ParticleField) {
        self.context.set_line_width(Self::LINK_LINE_WIDTH);
        for link in field.links() {
            self.context
                .set_stroke_style(&JsValue::from_str(&Color::accent(link.alpha).to_css()));
            self.context.begin_path();
            self.context.move_to(link.from[0], link.from[1]);
            self.context.line_to(link.to[0], link.to[1]);
            self.context.stroke();
        }
    }
}
