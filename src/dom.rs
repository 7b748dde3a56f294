//! DOM Bindings
//!
//! `web-sys` side of the delete flow: trigger lookup, item styling and
//! removal, the timer, and the document-ready hook.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::DeleteConfig;
use crate::error::DeleteError;
use crate::flow::{Delay, TaskItem};
use crate::models::{PendingStyle, TaskId};

pub fn document() -> Result<Document, DeleteError> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(DeleteError::NoWindow)
}

/// Materialize every element matching `selector`
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, DeleteError> {
    let list = doc.query_selector_all(selector).map_err(DeleteError::dom)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(doc: &Document, f: F) -> Result<(), DeleteError>
where
    F: FnOnce() + 'static,
{
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let cb = Closure::once(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .map_err(DeleteError::dom)?;
    cb.forget();
    Ok(())
}

/// A task `<li>` on the page
#[derive(Debug, Clone)]
pub struct DomTaskItem {
    element: HtmlElement,
}

impl DomTaskItem {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl TaskItem for DomTaskItem {
    fn mark_pending(&self, style: &PendingStyle) -> Result<(), DeleteError> {
        let css = self.element.style();
        css.set_property("transition", &style.transition).map_err(DeleteError::dom)?;
        css.set_property("background-color", &style.background_color)
            .map_err(DeleteError::dom)?;
        css.set_property("opacity", &style.opacity).map_err(DeleteError::dom)?;
        Ok(())
    }

    fn remove(&self) {
        self.element.remove();
    }
}

/// Find the task id and enclosing item for a clicked trigger
pub fn resolve_trigger(
    trigger: &Element,
    config: &DeleteConfig,
) -> Result<(TaskId, DomTaskItem), DeleteError> {
    let raw = trigger
        .get_attribute(&config.id_attribute)
        .ok_or(DeleteError::MissingTaskId)?;
    let id = TaskId::parse(&raw)?;

    let item = trigger
        .closest(&config.item_selector)
        .map_err(DeleteError::dom)?
        .ok_or(DeleteError::MissingItem)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DeleteError::Dom("task item is not an HTML element".to_string()))?;

    Ok((id, DomTaskItem::new(item)))
}

/// Browser timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn wait(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Append `html` inside a fresh container on the test page
    pub(crate) fn fixture(html: &str) -> Element {
        let doc = document().unwrap();
        let container = doc.create_element("div").unwrap();
        container.set_inner_html(html);
        doc.body().unwrap().append_child(&container).unwrap();
        container
    }

    fn button(container: &Element) -> Element {
        container.query_selector("button").unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_resolve_trigger_finds_id_and_item() {
        let root = fixture(
            r#"<ul><li><form><button class="delete-btn" data-id="42">x</button></form></li></ul>"#,
        );
        let (id, _item) = resolve_trigger(&button(&root), &DeleteConfig::default()).unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[wasm_bindgen_test]
    fn test_resolve_trigger_rejects_missing_or_blank_id() {
        let config = DeleteConfig::default();
        let missing = fixture(r#"<ul><li><button class="delete-btn">x</button></li></ul>"#);
        assert_eq!(
            resolve_trigger(&button(&missing), &config).unwrap_err(),
            DeleteError::MissingTaskId
        );

        let blank =
            fixture(r#"<ul><li><button class="delete-btn" data-id="  ">x</button></li></ul>"#);
        assert_eq!(
            resolve_trigger(&button(&blank), &config).unwrap_err(),
            DeleteError::MissingTaskId
        );
    }

    #[wasm_bindgen_test]
    fn test_resolve_trigger_without_item() {
        let root = fixture(r#"<form><button class="delete-btn" data-id="9">x</button></form>"#);
        assert_eq!(
            resolve_trigger(&button(&root), &DeleteConfig::default()).unwrap_err(),
            DeleteError::MissingItem
        );
    }

    #[wasm_bindgen_test]
    fn test_mark_pending_and_remove() {
        let root =
            fixture(r#"<ul><li><button class="delete-btn" data-id="5">x</button></li></ul>"#);
        let li: HtmlElement = root.query_selector("li").unwrap().unwrap().dyn_into().unwrap();
        let item = DomTaskItem::new(li.clone());

        item.mark_pending(&PendingStyle::default()).unwrap();
        assert_eq!(li.style().get_property_value("opacity").unwrap(), "0.6");
        assert_eq!(
            li.style().get_property_value("background-color").unwrap(),
            "rgb(248, 215, 218)"
        );

        assert!(li.is_connected());
        item.remove();
        assert!(!li.is_connected());
    }

    #[wasm_bindgen_test]
    fn test_on_ready_runs_now_when_parsed() {
        use std::cell::Cell;
        use std::rc::Rc;

        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        on_ready(&document().unwrap(), move || flag.set(true)).unwrap();
        assert!(ran.get());
    }

    #[wasm_bindgen_test]
    fn test_query_all_materializes_matches() {
        fixture(r#"<span class="qa-match"></span><span class="qa-match"></span>"#);
        let found = query_all(&document().unwrap(), ".qa-match").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[wasm_bindgen_test]
    fn test_query_all_bad_selector_is_dom_error() {
        let err = query_all(&document().unwrap(), "li[").unwrap_err();
        assert!(matches!(err, DeleteError::Dom(_)));
    }
}
