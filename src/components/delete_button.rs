//! Delete Button Binding
//!
//! Hooks every server-rendered delete button on the page. A click never
//! submits the surrounding form; it styles the task as pending, then the
//! delete flow sends the request and removes the task once it resolves.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::commands::HttpTaskApi;
use crate::config::DeleteConfig;
use crate::dom::{self, TimeoutDelay};
use crate::error::DeleteError;
use crate::flow;

/// Marks a trigger that already has our click listener
const BOUND_ATTR: &str = "data-delete-bound";

/// Bind a click listener to each trigger currently in the document.
/// Triggers bound by an earlier pass are skipped. Returns how many were
/// newly bound.
pub fn bind_delete_buttons(config: Rc<DeleteConfig>) -> Result<usize, DeleteError> {
    let doc = dom::document()?;
    let triggers = dom::query_all(&doc, &config.trigger_selector)?;
    let api = Rc::new(HttpTaskApi::new(config.clone()));

    let mut bound = 0;
    for trigger in triggers.iter().filter(|t| !t.has_attribute(BOUND_ATTR)) {
        bind_trigger(trigger, config.clone(), api.clone())?;
        bound += 1;
    }

    log::info!("bound {} delete buttons ({})", bound, config.trigger_selector);
    Ok(bound)
}

fn bind_trigger(
    trigger: &Element,
    config: Rc<DeleteConfig>,
    api: Rc<HttpTaskApi>,
) -> Result<(), DeleteError> {
    let target = trigger.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        activate(&target, &config, &api);
    });

    trigger
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(DeleteError::dom)?;
    // Listeners live as long as the page
    on_click.forget();
    trigger.set_attribute(BOUND_ATTR, "").map_err(DeleteError::dom)?;
    Ok(())
}

fn activate(trigger: &Element, config: &Rc<DeleteConfig>, api: &Rc<HttpTaskApi>) {
    let (id, item) = match dom::resolve_trigger(trigger, config) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::warn!("ignoring delete click: {}", e);
            return;
        }
    };

    log::debug!("delete requested for task {}", id);
    let pending = flow::begin(id, item, &config.pending_style);

    let config = config.clone();
    let api = api.clone();
    spawn_local(async move {
        let id = pending.id().clone();
        let outcome = pending.finish(api.as_ref(), &TimeoutDelay, &config).await;
        log::debug!("task {} is {:?}", id, outcome.state());
    });
}
