use crate::render::CanvasSurface;
use glam::Vec2;
use lake_core::RippleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    let decoded: js_sys::Promise = img.decode();
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", src, e))?;
    Ok(img)
}

/// Fetch the background and hand it to the field and the surface. A failed
/// load only logs; the field keeps running over the plain backdrop.
pub async fn install(
    src: &str,
    field: Rc<RefCell<RippleField>>,
    surface: Rc<RefCell<CanvasSurface>>,
) {
    match load_image(src).await {
        Ok(img) => {
            let size = Vec2::new(img.natural_width() as f32, img.natural_height() as f32);
            log::info!("[bg] loaded {} ({}x{})", src, size.x, size.y);
            field.borrow_mut().set_background_image(size);
            surface.borrow_mut().set_image(img);
        }
        Err(e) => log::warn!("[bg] {:?}", e),
    }
}
