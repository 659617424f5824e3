use crate::error::SurfaceError;
use crate::surface::Surface;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Operation(format!("{:?}", value))
    }
}

/// The browser page, reached through `web-sys`.
///
/// Outside a window (a worker, or a non-wasm target) the surface reports itself unavailable
/// and the toaster does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSurface;

impl Surface for WebSurface {
    type Element = Element;
    type Timer = Timeout;
    type Listener = dom::Listener;

    fn available(&self) -> bool {
        cfg!(target_arch = "wasm32") && dom::body().is_some()
    }

    fn now(&self) -> f64 {
        // Wall-clock time only stands in where the page has no performance timer.
        dom::timer::now().unwrap_or_else(js_sys::Date::now)
    }

    fn has_stylesheet(&self, id: &str) -> bool {
        dom::has_element(id)
    }

    fn insert_stylesheet(&self, id: &str, css: &str) -> Result<(), SurfaceError> {
        Ok(dom::insert_stylesheet(id, css)?)
    }

    fn create_element(&self, tag: &str) -> Result<Element, SurfaceError> {
        let document = dom::document().ok_or(SurfaceError::Unavailable)?;
        Ok(document.create_element(tag)?)
    }

    fn add_class(&self, element: &Element, classes: &str) -> Result<(), SurfaceError> {
        Ok(dom::add_classes(element, classes)?)
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), SurfaceError> {
        Ok(dom::remove_class(element, class)?)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), SurfaceError> {
        Ok(element.set_attribute(name, value)?)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_markup(&self, element: &Element, markup: &str) {
        element.set_inner_html(markup);
    }

    fn append(&self, parent: &Element, child: &Element) -> Result<(), SurfaceError> {
        parent.append_child(child)?;
        Ok(())
    }

    fn attach(&self, element: &Element) -> Result<(), SurfaceError> {
        let body = dom::body().ok_or(SurfaceError::Unavailable)?;
        body.append_child(element)?;
        Ok(())
    }

    fn detach(&self, element: &Element) {
        // A no-op for elements without a parent.
        element.remove();
    }

    fn schedule(&self, delay: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay, task)
    }

    fn defer(&self, delay: u32, task: Box<dyn FnOnce()>) {
        if let Err(e) = dom::timer::defer(delay, task) {
            log::error!("unable to schedule deferred task: {:?}", e)
        }
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) {
        if let Err(e) = dom::frame::request(task) {
            log::error!("unable to request animation frame: {:?}", e)
        }
    }

    fn on_hover(
        &self,
        element: &Element,
        enter: Box<dyn Fn()>,
        leave: Box<dyn Fn()>,
    ) -> Result<Vec<dom::Listener>, SurfaceError> {
        Ok(vec![
            dom::Listener::new(element, "mouseenter", move |_| enter())?,
            dom::Listener::new(element, "mouseleave", move |_| leave())?,
        ])
    }

    fn on_click(&self, element: &Element, handler: Box<dyn Fn()>) -> Result<dom::Listener, SurfaceError> {
        Ok(dom::Listener::new(element, "click", move |_| handler())?)
    }
}
