// DOM hooks and asset paths shared by the web frontend.

// Ripple field
pub const LAKE_CONTAINER_ID: &str = "lake"; // canvas is appended here
pub const BACKGROUND_SRC: &str = "images/bg-pixel-water.png";
pub const CLEAR_COLOR: &str = "#000000"; // opaque backdrop behind the image

// Scroll fade
pub const SECTION_SELECTOR: &str = ".section";
pub const VISIBLE_CLASS: &str = "visible";

// Config overrides are read from `data-<key>` attributes
pub const DATA_ATTR_PREFIX: &str = "data-";

#[inline]
pub fn data_attr(key: &str) -> String {
    format!("{}{}", DATA_ATTR_PREFIX, key)
}
