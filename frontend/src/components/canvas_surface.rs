use ece_shared::error::{ContentError, ContentResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

use crate::config::device_pixel_ratio;

fn unavailable(what: &str, err: JsValue) -> ContentError {
    ContentError::DecorationUnavailable(format!("{}: {:?}", what, err))
}

/// A 2D canvas sized to its CSS box, drawn in CSS pixels.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    pixel_ratio: f64,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Resolves the canvas behind `node` once layout has run. Fails when the
    /// node is gone or the browser refuses a 2D context.
    pub async fn attach(node: &NodeRef, retina: bool) -> ContentResult<Self> {
        // Let the page lay out first so the canvas has a size to match.
        JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
            .await
            .map_err(|e| unavailable("layout wait", e))?;

        let canvas = node
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| ContentError::DecorationUnavailable("canvas not mounted".to_string()))?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| unavailable("2d context", e))?
            .ok_or_else(|| ContentError::DecorationUnavailable("2d context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|obj| unavailable("2d context", obj.into()))?;

        let mut surface = Self {
            canvas,
            context,
            pixel_ratio: if retina { device_pixel_ratio() } else { 1.0 },
            width: 0.0,
            height: 0.0,
        };
        surface.fit();
        Ok(surface)
    }

    /// Matches the backing store to the element's current CSS size. Returns
    /// whether the size changed.
    pub fn fit(&mut self) -> bool {
        let width = self.canvas.client_width().max(1) as f64;
        let height = self.canvas.client_height().max(1) as f64;
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.canvas.set_width((width * self.pixel_ratio).round() as u32);
        self.canvas.set_height((height * self.pixel_ratio).round() as u32);
        let _ = self
            .context
            .set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0);
        true
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn clear(&self) {
        self.context.set_global_alpha(1.0);
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    pub fn dot(&self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
        if radius <= 0.0 {
            return;
        }
        self.context.begin_path();
        self.context.set_global_alpha(alpha.clamp(0.0, 1.0));
        self.context.set_fill_style_str(color);
        let _ = self.context.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.context.fill();
    }

    pub fn line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: &str, alpha: f64) {
        self.context.begin_path();
        self.context.set_global_alpha(alpha.clamp(0.0, 1.0));
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(width);
        self.context.move_to(from.0, from.1);
        self.context.line_to(to.0, to.1);
        self.context.stroke();
    }
}
