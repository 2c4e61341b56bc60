//! WASM bindings for primeshare
//!
//! This module provides JavaScript-friendly bindings for the core split/combine functionality.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::commands::{self, RenderedSecret};
use crate::domain::{ShareCount, SplitConfig, Threshold};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Split a text secret into Shamir shares
///
/// # Arguments
/// * `secret` - The secret to split (at most 159 bytes of UTF-8)
/// * `shares` - Total number of shares to create (1-255)
/// * `threshold` - Minimum number of shares needed to reconstruct (1-shares)
///
/// # Returns
/// JSON string containing the shares and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split("my_secret", 5, 3);
/// const data = JSON.parse(result);
/// console.log(`Created ${data.share_count} shares with threshold ${data.threshold}`);
/// const joined = data.shares.join(",");
/// ```
#[wasm_bindgen]
pub fn wasm_split(secret: &str, shares: u8, threshold: u8) -> Result<String, JsValue> {
    let threshold = Threshold::new(threshold)
        .map_err(|e| JsValue::from_str(&format!("Invalid threshold: {e}")))?;

    let share_count = ShareCount::new(shares)
        .map_err(|e| JsValue::from_str(&format!("Invalid share count: {e}")))?;

    let config = SplitConfig::new(threshold, share_count)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;

    let report = commands::split_report(secret, config)
        .map_err(|e| JsValue::from_str(&format!("Split failed: {e:#}")))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Combine shares to reconstruct the original secret
///
/// Binary secrets come back hex-encoded. Fewer shares than the split
/// threshold produce a wrong secret rather than an error.
///
/// # Example (JavaScript)
/// ```javascript
/// const secret = wasm_combine(["1-...", "3-..."]);
/// ```
#[wasm_bindgen]
pub fn wasm_combine(shares: Vec<String>) -> Result<String, JsValue> {
    let secret = commands::combine_shares(&shares)
        .map_err(|e| JsValue::from_str(&format!("Combine failed: {e:#}")))?;

    Ok(match commands::render_secret(&secret) {
        RenderedSecret::Text(text) => text.to_string(),
        RenderedSecret::Hex(hex) => hex.to_string(),
    })
}

/// Parse a share to extract its metadata
///
/// # Returns
/// JSON string containing `share_index` and `byte_width`, or an error message
#[wasm_bindgen]
pub fn wasm_parse_share(share: &str) -> Result<String, JsValue> {
    let parsed =
        codec::parse_share(share).map_err(|e| JsValue::from_str(&format!("Parse failed: {e}")))?;

    #[derive(Serialize)]
    struct ShareMetadata {
        share_index: u32,
        byte_width: usize,
    }

    let byte_width = share
        .split_once(codec::SEPARATOR)
        .map_or(0, |(_, value)| value.len() / 2);

    let metadata = ShareMetadata {
        share_index: *parsed.index,
        byte_width,
    };

    serde_json::to_string(&metadata)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
