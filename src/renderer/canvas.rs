//! Canvas 2D backend for the browser build

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Surface, TextAlign};

/// `Surface` over an `HtmlCanvasElement`'s 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Size the canvas to `width` x `height` and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }
}

/// Draw calls can't fail in a way the game cares about; log and move on
fn log_err(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_line_dash(&mut self, dash: f32, gap: f32) {
        let segments = Array::of2(&JsValue::from_f64(dash as f64), &JsValue::from_f64(gap as f64));
        log_err("setLineDash", self.ctx.set_line_dash(&segments));
    }

    fn clear_line_dash(&mut self) {
        log_err("setLineDash", self.ctx.set_line_dash(&Array::new()));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn stroke(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(align.as_str());
        log_err("fillText", self.ctx.fill_text(text, x as f64, y as f64));
    }
}
