use crate::dom;
use lake_core::{FadeConfig, RippleConfig};
use web_sys as web;

/// Ripple settings from `data-*` attributes on the lake container. Bad
/// entries are logged and skipped; an invalid result falls back to defaults.
pub fn ripple_config(container: &web::Element) -> RippleConfig {
    let mut cfg = RippleConfig::default();
    for (key, value) in dom::data_overrides(container, RippleConfig::KEYS) {
        if let Err(e) = cfg.apply_override(key, &value) {
            log::warn!("[config] {}", e);
        }
    }
    if let Err(e) = cfg.validate() {
        log::warn!("[config] {}; using ripple defaults", e);
        return RippleConfig::default();
    }
    cfg
}

pub fn fade_config(root: Option<web::Element>) -> FadeConfig {
    let mut cfg = FadeConfig::default();
    let Some(root) = root else {
        return cfg;
    };
    for (key, value) in dom::data_overrides(&root, FadeConfig::KEYS) {
        if let Err(e) = cfg.apply_override(key, &value) {
            log::warn!("[config] {}", e);
        }
    }
    if let Err(e) = cfg.validate() {
        log::warn!("[config] {}; using fade defaults", e);
        return FadeConfig::default();
    }
    cfg
}
