//! Delete Handler Configuration
//!
//! Selectors, endpoint and timing for the delete interaction. Every field
//! has a default matching the server-rendered to-do page, so a page only
//! has to set what differs.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::DeleteError;
use crate::models::{PendingStyle, TaskId};

/// Global the host page may define before the module loads
pub const CONFIG_GLOBAL: &str = "TODO_DELETE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteConfig {
    /// Elements that start a delete when clicked
    pub trigger_selector: String,
    /// Ancestor of the trigger that represents the task
    pub item_selector: String,
    /// Attribute on the trigger holding the task id
    pub id_attribute: String,
    /// Request path is `endpoint_prefix` + encoded id
    pub endpoint_prefix: String,
    /// Wait between styling and sending; matches the transition length
    pub delay_ms: u32,
    pub pending_style: PendingStyle,
    /// Treat non-2xx responses as failures
    pub check_status: bool,
    pub log_level: String,
    /// Bind on module start; when false the page calls `initDeleteButtons` itself
    pub auto_bind: bool,
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".delete-btn".to_string(),
            item_selector: "li".to_string(),
            id_attribute: "data-id".to_string(),
            endpoint_prefix: "/delete_task/".to_string(),
            delay_ms: 500,
            pending_style: PendingStyle::default(),
            check_status: false,
            log_level: "info".to_string(),
            auto_bind: true,
        }
    }
}

impl DeleteConfig {
    pub fn from_json(json: &str) -> Result<Self, DeleteError> {
        serde_json::from_str(json).map_err(|e| DeleteError::Config(e.to_string()))
    }

    /// Read from a JS object or a JSON string. `undefined` and `null` give
    /// the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, DeleteError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        if let Some(json) = value.as_string() {
            return Self::from_json(&json);
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| DeleteError::Config(e.to_string()))
    }

    pub fn endpoint(&self, id: &TaskId) -> String {
        format!("{}{}", self.endpoint_prefix, id.path_segment())
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_from_js_accepts_json_string() {
        let value = JsValue::from_str(r#"{ "delay_ms": 100, "trigger_selector": ".remove" }"#);
        let config = DeleteConfig::from_js(value).unwrap();
        assert_eq!(config.delay_ms, 100);
        assert_eq!(config.trigger_selector, ".remove");
        assert_eq!(config.item_selector, "li");
    }

    #[wasm_bindgen_test]
    fn test_from_js_object_and_missing() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"check_status".into(), &JsValue::TRUE).unwrap();
        let config = DeleteConfig::from_js(obj.into()).unwrap();
        assert!(config.check_status);

        assert_eq!(DeleteConfig::from_js(JsValue::UNDEFINED).unwrap(), DeleteConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_from_js_bad_string_is_config_error() {
        let err = DeleteConfig::from_js(JsValue::from_str("not json")).unwrap_err();
        assert!(matches!(err, DeleteError::Config(_)));
    }
}
