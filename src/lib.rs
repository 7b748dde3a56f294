//! Todo Delete UI
//!
//! WebAssembly enhancement for the server-rendered to-do list. Delete
//! buttons get a short fade to light red before the task is deleted on the
//! server and dropped from the list.

pub mod commands;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod flow;
mod logging;
pub mod models;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::{DeleteConfig, CONFIG_GLOBAL};
use crate::error::DeleteError;

/// Module entry. Reads `window.TODO_DELETE_CONFIG` if the page set one and
/// binds the delete buttons once the document is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = page_config();
    let level = config
        .as_ref()
        .map(DeleteConfig::level_filter)
        .unwrap_or(log::LevelFilter::Info);
    logging::install(level);
    let config = config.unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        DeleteConfig::default()
    });

    if !config.auto_bind {
        log::debug!("auto_bind disabled, waiting for initDeleteButtons()");
        return Ok(());
    }
    bind_when_ready(config)?;
    Ok(())
}

/// Bind with an explicit config object (or a JSON string). Meant for pages
/// that set `auto_bind: false` and call this themselves; triggers that are
/// already bound are skipped, so calling it again only picks up new ones.
#[wasm_bindgen(js_name = initDeleteButtons)]
pub fn init_delete_buttons(config: JsValue) -> Result<(), JsValue> {
    let config = DeleteConfig::from_js(config)?;
    logging::install(config.level_filter());
    bind_when_ready(config)?;
    Ok(())
}

fn page_config() -> Result<DeleteConfig, DeleteError> {
    let window = web_sys::window().ok_or(DeleteError::NoWindow)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(DeleteError::dom)?;
    DeleteConfig::from_js(value)
}

fn bind_when_ready(config: DeleteConfig) -> Result<(), DeleteError> {
    let doc = dom::document()?;
    let config = Rc::new(config);
    dom::on_ready(&doc, move || {
        if let Err(e) = components::bind_delete_buttons(config) {
            log::error!("failed to bind delete buttons: {}", e);
        }
    })
}
