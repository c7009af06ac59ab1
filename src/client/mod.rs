//! HTTP client implementations for both targets: reqwest for native
//! builds, gloo_net over the browser fetch API for WASM builds. Both
//! satisfy the traits in `crate::interface` and share the response
//! contract implemented by `server_message`.

use serde_json::Value;

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::NoWasmClient;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmClient;

/// Extracts the human-readable message from a non-2xx body: the JSON
/// `mensaje` (or `message`) field when present, the whole JSON value
/// otherwise, the raw text for non-JSON bodies, and `fallback` (the
/// status line) when the body is blank.
pub(crate) fn server_message(text: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(msg) = value.get("mensaje").and_then(Value::as_str) {
            return msg.to_string();
        }
        if let Some(msg) = value.get("message").and_then(Value::as_str) {
            return msg.to_string();
        }
        return value.to_string();
    }
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text.to_string()
    }
}
