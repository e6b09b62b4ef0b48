//! Thin helpers over `web_sys` element lookups and mutations.
//!
//! Lookups return `None`/empty on failure; mutations ignore failures. The
//! widgets treat missing markup as "nothing to do".

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::error::{WebError, WebResult};

pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document() -> WebResult<Document> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// First descendant of `root` matching `selector`.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// First descendant of `root` matching `selector`, as an `HtmlElement`.
pub fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    query(root, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Set the CSS `display` of an element.
pub fn set_display(element: &HtmlElement, display: &str) {
    let _ = element.style().set_property("display", display);
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    let _ = element.set_attribute(name, value);
}

/// Disable a control. Non-button elements get the attribute instead of the
/// property.
pub fn disable(element: &HtmlElement) {
    match element.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.set_disabled(true),
        None => set_attr(element, "disabled", ""),
    }
}
