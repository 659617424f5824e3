//! JavaScript entry points, backed by one toaster per page.

use crate::error::RenderError;
use crate::options::{NotifyArgs, NotifyOptions, Position, RenderContext, Rendered, ToastType};
use crate::toaster::Toaster;
use crate::web::WebSurface;
use js_sys::{Function, Reflect};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

thread_local! {
    // Registry mutation stays on the UI thread that owns the page.
    static TOASTER: Toaster<WebSurface> = Toaster::new(WebSurface);
}

/// The plain data part of a JavaScript options object. Callbacks are read separately.
///
/// A field holding a value of the wrong shape is dropped on its own; the rest of the record
/// still applies.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Fields {
    #[serde(deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    message: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    toast_type: Option<ToastType>,
    #[serde(deserialize_with = "lenient")]
    duration: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    closable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pause_on_hover: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    position: Option<Position>,
    #[serde(deserialize_with = "lenient")]
    container_class: Option<String>,
    #[serde(deserialize_with = "lenient")]
    toast_class: Option<String>,
    #[serde(deserialize_with = "lenient")]
    inject_styles: Option<bool>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(field) => Ok(Some(field)),
        Err(e) => {
            log::warn!("ignoring toast option {}: {}", value, e);
            Ok(None)
        }
    }
}

impl<E> From<Fields> for NotifyOptions<E> {
    fn from(fields: Fields) -> Self {
        NotifyOptions {
            id: fields.id,
            title: fields.title,
            message: fields.message,
            toast_type: fields.toast_type,
            duration: fields.duration,
            closable: fields.closable,
            pause_on_hover: fields.pause_on_hover,
            position: fields.position,
            container_class: fields.container_class,
            toast_class: fields.toast_class,
            inject_styles: fields.inject_styles,
            on_close: None,
            render: None,
        }
    }
}

fn decode(value: &JsValue) -> NotifyOptions<Element> {
    if !value.is_object() {
        return NotifyOptions::default();
    }

    let mut options: NotifyOptions<Element> = match value.into_serde::<Fields>() {
        Ok(fields) => fields.into(),
        Err(e) => {
            log::warn!("ignoring malformed toast options: {}", e);
            NotifyOptions::default()
        }
    };
    if let Some(on_close) = function(value, "onClose") {
        options.on_close = Some(Rc::new(move || {
            if let Err(e) = on_close.call0(&JsValue::NULL) {
                log::error!("onClose callback failed: {:?}", e)
            }
        }));
    }
    if let Some(render) = function(value, "render") {
        options.render = Some(Rc::new(move |context: &RenderContext| {
            render_with(&render, context)
        }));
    }
    options
}

fn function(value: &JsValue, key: &str) -> Option<Function> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn render_with(render: &Function, context: &RenderContext) -> Result<Rendered<Element>, RenderError> {
    let argument = JsValue::from_serde(context).map_err(|e| RenderError::new(e.to_string()))?;
    let value = render
        .call1(&JsValue::NULL, &argument)
        .map_err(|e| RenderError::new(format!("{:?}", e)))?;
    match value.dyn_into::<Element>() {
        Ok(element) => Ok(Rendered::Element(element)),
        Err(value) => value
            .as_string()
            .map(Rendered::Markup)
            .ok_or_else(|| RenderError::new("renderer returned neither markup nor an element")),
    }
}

fn args(message_or_options: &JsValue, options: &JsValue) -> NotifyArgs<Element> {
    match message_or_options.as_string() {
        Some(message) => NotifyArgs::message(message, decode(options)),
        None => decode(message_or_options).into(),
    }
}

#[wasm_bindgen]
pub fn notify(message_or_options: JsValue, options: JsValue) -> Option<String> {
    TOASTER.with(|toaster| toaster.notify(args(&message_or_options, &options)))
}

#[wasm_bindgen]
pub fn info(message_or_options: JsValue, options: JsValue) -> Option<String> {
    TOASTER.with(|toaster| toaster.info(args(&message_or_options, &options)))
}

#[wasm_bindgen]
pub fn success(message_or_options: JsValue, options: JsValue) -> Option<String> {
    TOASTER.with(|toaster| toaster.success(args(&message_or_options, &options)))
}

#[wasm_bindgen]
pub fn error(message_or_options: JsValue, options: JsValue) -> Option<String> {
    TOASTER.with(|toaster| toaster.error(args(&message_or_options, &options)))
}

#[wasm_bindgen]
pub fn warning(message_or_options: JsValue, options: JsValue) -> Option<String> {
    TOASTER.with(|toaster| toaster.warning(args(&message_or_options, &options)))
}

#[wasm_bindgen]
pub fn dismiss(id: &str) {
    TOASTER.with(|toaster| toaster.dismiss(id))
}

#[wasm_bindgen]
pub fn clear() {
    TOASTER.with(|toaster| toaster.clear())
}

#[wasm_bindgen]
pub fn configure(options: JsValue) {
    TOASTER.with(|toaster| toaster.configure(decode(&options)))
}

/// Sends `log` output to the browser console and reports panics there too.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = level
        .as_deref()
        .and_then(|level| log::Level::from_str(level).ok())
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
}
