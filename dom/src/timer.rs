use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Milliseconds on the page's monotonic clock, or `None` outside a window.
pub fn now() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}

/// Runs `callback` once after `delay` milliseconds. Nothing is kept on the Rust side: the
/// closure is released by the browser after it runs.
pub fn defer<F>(delay: u32, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let callback = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay).unwrap_or(i32::MAX),
    )
}
