// Shared helpers for the wasm-facing components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Scale each channel of a 0..1 rgb triple by `level`.
pub fn scale_rgb(rgb: [f64; 3], level: f64) -> [f64; 3] {
    [rgb[0] * level, rgb[1] * level, rgb[2] * level]
}

/// Format a 0..1 rgb triple as a CSS rgba() string.
pub fn css_rgba(rgb: [f64; 3], alpha: f64) -> String {
    format!(
        "rgba({},{},{},{})",
        (rgb[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        alpha.clamp(0.0, 1.0)
    )
}
