//! DOM Helpers
//!
//! Thin wrappers over web-sys for the lookups and mutations every binding needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{UiError, UiResult};

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoWindow)
}

pub fn body() -> UiResult<HtmlElement> {
    document()?.body().ok_or(UiError::Missing("body"))
}

pub fn by_id(id: &str) -> UiResult<Option<Element>> {
    Ok(document()?.get_element_by_id(id))
}

/// All matches of `selector` in the document, in document order
pub fn query_all(selector: &str) -> UiResult<Vec<Element>> {
    Ok(elements(document()?.query_selector_all(selector)?))
}

/// All matches of `selector` below `root`
pub fn query_within(root: &Element, selector: &str) -> UiResult<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the page lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> UiResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` before the next repaint
pub fn next_frame<F>(f: F) -> UiResult<()>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> UiResult<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Set an inline style property; non-HTML elements are left alone
pub fn set_style(element: &Element, property: &str, value: &str) -> UiResult<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn scroll_y() -> UiResult<f64> {
    Ok(window()?.scroll_y()?)
}

/// Viewport `(width, height)` in CSS pixels
pub fn viewport_size() -> UiResult<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// `(offsetTop, offsetHeight)` of an HTML element
pub fn offset_box(element: &Element) -> Option<(f64, f64)> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| (f64::from(html.offset_top()), f64::from(html.offset_height())))
}

/// Log a failed binding step instead of aborting the handler
pub fn log_failure(context: &str, result: UiResult<()>) {
    if let Err(e) = result {
        log::warn!("[{}] {}", context, e);
    }
}
