use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

pub mod events;
pub mod frame;
pub mod timer;

pub use events::Listener;

/// The current page document, if the code is running somewhere that has one.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|document| document.body())
}

pub fn has_element(id: &str) -> bool {
    document().map_or(false, |document| document.get_element_by_id(id).is_some())
}

/// Adds a `<style>` element with the given id to the document head (or the body when the page
/// has no head).
pub fn insert_stylesheet(id: &str, css: &str) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("no document available"))?;
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => append_to_body(&style)?,
    };
    Ok(())
}

pub fn append_to_body(element: &Element) -> Result<web_sys::Node, JsValue> {
    match body() {
        Some(body) => body.append_child(element),
        None => Err(JsValue::from_str("no document body available")),
    }
}

/// Adds each whitespace separated class in `classes` to the element.
pub fn add_classes(element: &Element, classes: &str) -> Result<(), JsValue> {
    let list = element.class_list();
    for class in classes.split_whitespace() {
        list.add_1(class)?;
    }
    Ok(())
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}
