//! Delete Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeleteError {
    /// The request promise rejected: network failure or a thrown fetch
    #[error("delete request failed: {0}")]
    Request(String),

    /// Non-2xx response while status checking is enabled
    #[error("delete request returned HTTP {0}")]
    Status(u16),

    #[error("delete trigger has no task id")]
    MissingTaskId,

    #[error("delete trigger is not inside a task item")]
    MissingItem,

    #[error("dom error: {0}")]
    Dom(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("no window or document available")]
    NoWindow,
}

impl DeleteError {
    pub fn request(err: JsValue) -> Self {
        DeleteError::Request(js_message(&err))
    }

    pub fn dom(err: JsValue) -> Self {
        DeleteError::Dom(js_message(&err))
    }
}

impl From<DeleteError> for JsValue {
    fn from(err: DeleteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Readable text for a thrown JS value
fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
