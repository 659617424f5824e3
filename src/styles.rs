use crate::config;
use crate::surface::Surface;

/// Inserts the default stylesheet unless the page already has one.
pub(crate) fn ensure<S: Surface>(surface: &S) {
    if surface.has_stylesheet(config::STYLE_ID) {
        return;
    }
    log::trace!("styles: injecting default stylesheet");
    if let Err(e) = surface.insert_stylesheet(config::STYLE_ID, config::STYLESHEET) {
        log::error!("unable to inject toast styles: {}", e)
    }
}
