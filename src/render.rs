use crate::constants::CLEAR_COLOR;
use glam::Vec2;
use lake_core::{css_hex, CoverFit, RingStroke, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the ripple field's drawing surface.
///
/// Everything is drawn in CSS px; the context transform maps that onto the
/// devicePixelRatio-scaled backing store.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    image: Option<web::HtmlImageElement>,
    viewport: Vec2,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement, viewport: Vec2) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        Ok(Self {
            ctx,
            image: None,
            viewport,
            dpr,
        })
    }

    pub fn set_image(&mut self, image: web::HtmlImageElement) {
        self.image = Some(image);
    }

    pub fn resize(&mut self, viewport: Vec2, dpr: f64) {
        self.viewport = viewport;
        self.dpr = dpr;
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let c = &self.ctx;
        _ = c.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        c.set_filter("none");
        c.set_global_alpha(1.0);
        c.set_fill_style_str(CLEAR_COLOR);
        c.fill_rect(0.0, 0.0, self.viewport.x as f64, self.viewport.y as f64);
    }

    fn draw_background(&mut self, fit: &CoverFit) {
        let Some(img) = &self.image else {
            return;
        };
        // pixel-art source: nearest-neighbour scaling
        self.ctx.set_image_smoothing_enabled(false);
        _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            fit.origin.x as f64,
            fit.origin.y as f64,
            fit.size.x as f64,
            fit.size.y as f64,
        );
    }

    fn stroke_ring(&mut self, ring: &RingStroke) {
        if ring.alpha <= 0.0 || ring.line_width <= 0.0 {
            return;
        }
        let c = &self.ctx;
        c.save();
        c.set_filter(&format!(
            "blur({:.2}px) brightness({:.3})",
            ring.blur_px, ring.brightness
        ));
        c.set_global_alpha(ring.alpha as f64);
        c.set_stroke_style_str(&css_hex(ring.color));
        c.set_line_width(ring.line_width as f64);
        c.begin_path();
        _ = c.arc(
            ring.center.x as f64,
            ring.center.y as f64,
            ring.radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        c.stroke();
        c.restore();
    }
}
