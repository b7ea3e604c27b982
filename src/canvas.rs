// Browser side of the drawing surface: finds (or creates) the background and
// overlay canvases, grabs their 2d contexts and forwards Surface calls to them.

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

// Fixed full-screen layers that never eat pointer events: one behind the page
// for the field, one above everything for confetti
pub const BACKGROUND_CSS: &str = "position: fixed; top: 0; left: 0; z-index: -1; pointer-events: none;";
pub const OVERLAY_CSS: &str = "position: fixed; top: 0; left: 0; z-index: 10000; pointer-events: none;";

pub struct CanvasSurface {
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { context })
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    #[allow(deprecated)]
    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    #[allow(deprecated)]
    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.context.begin_path();
        match self.context.arc(x, y, radius, 0.0, PI * 2.0) {
            Ok(()) => self.context.fill(),
            Err(e) => console::warn_2(&"skipping particle, arc failed:".into(), &e),
        }
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

// Reuses the element with `id` when it exists, otherwise inserts a fresh
// canvas styled with `css` as the first child of <body>
pub fn find_or_create_canvas(document: &Document, id: &str, css: &str) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(element) = document.get_element_by_id(id) {
        return element.dyn_into::<HtmlCanvasElement>().map_err(|_| {
            JsValue::from_str(&format!("element #{} is not a canvas", id))
        });
    }

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(id);
    canvas.style().set_css_text(css);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.insert_before(&canvas, body.first_child().as_ref())?;
    Ok(canvas)
}
