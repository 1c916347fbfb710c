//! Functions exported to the UI shell through `wasm-bindgen`.

use log::warn;
use wasm_bindgen::prelude::*;

use crate::converters::elementor::{constants::DEFAULT_PAGE_TITLE, ConverterBuilder};
use crate::models::messages::PluginMessage;
use crate::plugin::{handle_raw_message, parse_selection};

/// Routes `log` output to the browser console and installs the panic hook.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        warn!("Logger already initialised: {}", e);
    }
}

/// Answers a UI request (JSON) against a selection (JSON node or node list).
///
/// Returns the reply as JSON, or nothing for requests without a reply.
#[wasm_bindgen]
pub fn handle_plugin_message(request_json: &str, selection_json: &str) -> Option<String> {
    let reply = parse_selection(selection_json)
        .and_then(|selection| handle_raw_message(request_json, &selection));
    match reply {
        Ok(reply) => reply,
        Err(e) => {
            let message = PluginMessage::Error {
                message: e.to_string(),
            };
            serde_json::to_string(&message).ok()
        }
    }
}

/// Builds a page document from builder input JSON and returns it as JSON.
#[wasm_bindgen]
pub fn build_elementor_page_json(
    nodes_json: &str,
    title: Option<String>,
    pretty: bool,
) -> Result<String, JsValue> {
    ConverterBuilder::new()
        .title(title.unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()))
        .pretty(pretty)
        .build()
        .and_then(|converter| converter.export_json(nodes_json))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
