//! Task Commands
//!
//! Delete requests sent with `fetch`.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::DeleteConfig;
use crate::error::DeleteError;
use crate::flow::TaskApi;
use crate::models::{DeleteResponse, TaskId};

/// `POST url` with no body. Any resolved response is returned as-is.
pub async fn delete_task(url: &str) -> Result<DeleteResponse, DeleteError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    let request = Request::new_with_str_and_init(url, &opts).map_err(DeleteError::request)?;

    let window = web_sys::window().ok_or(DeleteError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(DeleteError::request)?;
    let response: Response = value.dyn_into().map_err(DeleteError::request)?;

    Ok(DeleteResponse { status: response.status() })
}

/// Task API backed by the page's own origin
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    config: Rc<DeleteConfig>,
}

impl HttpTaskApi {
    pub fn new(config: Rc<DeleteConfig>) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn delete_task(&self, id: &TaskId) -> Result<DeleteResponse, DeleteError> {
        let url = self.config.endpoint(id);
        log::debug!("POST {}", url);
        delete_task(&url).await
    }
}
