// Host-side tests for web constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn data_attr_prefixes_key() {
    assert_eq!(data_attr("decay"), "data-decay");
    assert_eq!(data_attr("ring-color"), "data-ring-color");
}

#[test]
fn override_keys_map_to_valid_attribute_names() {
    for key in lake_core::RippleConfig::KEYS
        .iter()
        .chain(lake_core::FadeConfig::KEYS)
    {
        let attr = data_attr(key);
        assert!(attr
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-'));
        assert!(!attr.ends_with('-'));
    }
}

#[test]
fn selectors_and_ids_are_plain() {
    assert!(SECTION_SELECTOR.starts_with('.'));
    assert!(!LAKE_CONTAINER_ID.starts_with('#'));
    assert!(!VISIBLE_CLASS.contains(' '));
    assert!(BACKGROUND_SRC.ends_with(".png"));
    assert_eq!(lake_core::parse_color(CLEAR_COLOR), Some(0x000000));
}
