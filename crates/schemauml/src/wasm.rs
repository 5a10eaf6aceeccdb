//! WebAssembly bindings for schemauml
//!
//! Exposes the pure schema-to-PlantUML conversion to the browser. Schema
//! fetching is not available here.

use wasm_bindgen::prelude::*;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Convert schema JSON into PlantUML markup
///
/// Accepts a bare array of class descriptors or a `/schemas` response
/// object. Throws a JavaScript error when the JSON cannot be decoded.
#[wasm_bindgen]
pub fn schema_to_plantuml(json: &str) -> Result<String, JsValue> {
    crate::render_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Count classes and reference edges in schema JSON
///
/// Returns a JSON string with `class_count` and `reference_count`.
#[wasm_bindgen]
pub fn schema_stats(json: &str) -> Result<String, JsValue> {
    let schema =
        crate::core::Schema::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let stats = serde_json::json!({
        "class_count": schema.class_count(),
        "reference_count": schema.reference_count(),
    });
    Ok(stats.to_string())
}
