use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Runs `callback` once on the next animation frame.
pub fn request<F>(callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let callback = Closure::once_into_js(callback);
    window.request_animation_frame(callback.unchecked_ref())
}
