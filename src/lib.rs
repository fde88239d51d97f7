#![cfg(target_arch = "wasm32")]
use lake_core::{RippleField, ScrollFader};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod config;
mod constants;
mod dom;
mod events;
mod fade;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lake-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Scroll fade is independent of the lake; start it first so a missing
    // container does not take it down.
    let fader = ScrollFader::new(config::fade_config(document.document_element()));
    let sections = fade::collect_sections(&document);
    log::info!("[fade] tracking {} sections", sections.len());
    events::wire_scroll_fade(fader, sections);

    init_lake(&document).await
}

async fn init_lake(document: &web::Document) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(constants::LAKE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::LAKE_CONTAINER_ID))?;
    if let Some(el) = container.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property("pointer-events", "none");
    }

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.style().set_property("display", "block");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let viewport = dom::sync_canvas_to_window(&canvas);
    let surface = Rc::new(RefCell::new(render::CanvasSurface::new(&canvas, viewport)?));

    let cfg = config::ripple_config(&container);
    log::info!(
        "[ripple] viewport {}x{} color {}",
        viewport.x,
        viewport.y,
        cfg.css_color()
    );
    let field = Rc::new(RefCell::new(RippleField::new(cfg, viewport, input::now_ms())));

    events::wire_resize(canvas.clone(), field.clone(), surface.clone());
    events::wire_pointermove(canvas, field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field: field.clone(),
        surface: surface.clone(),
        frames: 0,
    }));
    frame::start_loop(frame_ctx);

    // Rings run over the plain backdrop until the image arrives.
    background::install(constants::BACKGROUND_SRC, field, surface).await;
    Ok(())
}
