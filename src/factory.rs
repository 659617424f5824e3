use crate::config;
use crate::error::SurfaceError;
use crate::options::{Rendered, ResolvedOptions};
use crate::surface::Surface;

/// A freshly built toast element and the listeners it owns.
pub(crate) struct Built<S: Surface> {
    pub(crate) element: S::Element,
    pub(crate) listeners: Vec<S::Listener>,
}

/// Builds the toast element, starting out in the hidden state so the entrance transition can
/// play once it is attached.
pub(crate) fn build<S: Surface>(
    surface: &S,
    options: &ResolvedOptions<S::Element>,
    dismiss: Box<dyn Fn()>,
) -> Result<Built<S>, SurfaceError> {
    let prefix = config::CLASS_PREFIX;
    let root = surface.create_element("div")?;
    surface.add_class(
        &root,
        &format!("{prefix} {prefix}--{} {}", options.toast_type, config::HIDE_CLASS),
    )?;
    surface.add_class(&root, &options.toast_class)?;
    surface.set_attribute(&root, config::ID_ATTRIBUTE, &options.id)?;
    if options.toast_type.is_urgent() {
        surface.set_attribute(&root, "role", "alert")?;
        surface.set_attribute(&root, "aria-live", "assertive")?;
    } else {
        surface.set_attribute(&root, "role", "status")?;
        surface.set_attribute(&root, "aria-live", "polite")?;
    }
    surface.set_attribute(&root, "aria-atomic", "true")?;
    surface.set_attribute(&root, "style", "pointer-events: auto;")?;

    let rendered = options.render.as_ref().and_then(|render| {
        match render(&options.context()) {
            Ok(rendered) => Some(rendered),
            Err(e) => {
                log::warn!("toast {}: {}, using default layout", options.id, e);
                None
            }
        }
    });
    match rendered {
        Some(Rendered::Markup(markup)) => {
            let content = content(surface)?;
            surface.set_markup(&content, &markup);
            surface.append(&root, &content)?;
        }
        Some(Rendered::Element(element)) => surface.append(&root, &element)?,
        None => surface.append(&root, &default_layout(surface, options)?)?,
    }

    let mut listeners = Vec::new();
    if options.closable {
        let close = surface.create_element("button")?;
        surface.add_class(&close, &format!("{prefix}__close"))?;
        surface.set_attribute(&close, "type", "button")?;
        surface.set_attribute(&close, "aria-label", "Close")?;
        surface.set_text(&close, "\u{00d7}");
        listeners.push(surface.on_click(&close, dismiss)?);
        surface.append(&root, &close)?;
    }

    Ok(Built {
        element: root,
        listeners,
    })
}

fn content<S: Surface>(surface: &S) -> Result<S::Element, SurfaceError> {
    let content = surface.create_element("div")?;
    surface.add_class(&content, &format!("{}__content", config::CLASS_PREFIX))?;
    Ok(content)
}

fn default_layout<S: Surface>(
    surface: &S,
    options: &ResolvedOptions<S::Element>,
) -> Result<S::Element, SurfaceError> {
    let content = content(surface)?;
    for (part, text) in [("title", &options.title), ("message", &options.message)] {
        if text.is_empty() {
            continue;
        }
        let line = surface.create_element("div")?;
        surface.add_class(&line, &format!("{}__{part}", config::CLASS_PREFIX))?;
        surface.set_text(&line, text);
        surface.append(&content, &line)?;
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::options::{NotifyOptions, ToastType};
    use crate::testing::{MemorySurface, Node};
    use std::cell::Cell;
    use std::rc::Rc;

    fn resolve(options: NotifyOptions<Node>) -> ResolvedOptions<Node> {
        options.resolve("toast-1".to_string())
    }

    fn noop() -> Box<dyn Fn()> {
        Box::new(|| {})
    }

    #[test]
    fn default_layout_uses_text() {
        let surface = MemorySurface::new();
        let options = resolve(
            NotifyOptions::new()
                .title("Saved")
                .message("<b>done</b>")
                .toast_type(ToastType::Success),
        );
        let built = build(&surface, &options, noop()).unwrap();
        let root = built.element;

        assert!(root.has_class("nifty-toast"));
        assert!(root.has_class("nifty-toast--success"));
        assert!(root.has_class("nifty-toast--hide"));
        assert_eq!(root.attribute("data-toast-id").as_deref(), Some("toast-1"));
        assert_eq!(root.attribute("role").as_deref(), Some("status"));
        assert_eq!(root.attribute("aria-live").as_deref(), Some("polite"));

        let message = root.find("nifty-toast__message").unwrap();
        assert_eq!(message.text(), "<b>done</b>");
        assert!(message.markup().is_none());
        assert_eq!(root.find("nifty-toast__title").unwrap().text(), "Saved");
    }

    #[test]
    fn urgent_types_are_assertive() {
        let surface = MemorySurface::new();
        let options = resolve(NotifyOptions::new().toast_type(ToastType::Error));
        let root = build(&surface, &options, noop()).unwrap().element;
        assert_eq!(root.attribute("role").as_deref(), Some("alert"));
        assert_eq!(root.attribute("aria-live").as_deref(), Some("assertive"));
    }

    #[test]
    fn empty_toast_still_renders() {
        let surface = MemorySurface::new();
        let options = resolve(NotifyOptions::new().closable(false));
        let built = build(&surface, &options, noop()).unwrap();

        let content = built.element.find("nifty-toast__content").unwrap();
        assert!(content.children().is_empty());
        assert!(built.listeners.is_empty());
    }

    #[test]
    fn close_control_dismisses() {
        let surface = MemorySurface::new();
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let options = resolve(NotifyOptions::new().message("hi"));
        let built = build(&surface, &options, Box::new(move || counter.set(counter.get() + 1))).unwrap();

        let close = built.element.find("nifty-toast__close").unwrap();
        assert_eq!(close.tag(), "button");
        surface.click(&close);
        assert_eq!(clicks.get(), 1);
        assert_eq!(built.listeners.len(), 1);
    }

    #[test]
    fn custom_markup() {
        let surface = MemorySurface::new();
        let options = resolve(
            NotifyOptions::new()
                .message("hi")
                .render(|context| Ok(Rendered::Markup(format!("<em>{}</em>", context.message)))),
        );
        let root = build(&surface, &options, noop()).unwrap().element;
        let content = root.find("nifty-toast__content").unwrap();
        assert_eq!(content.markup().as_deref(), Some("<em>hi</em>"));
    }

    #[test]
    fn custom_element_is_used_directly() {
        let surface = MemorySurface::new();
        let custom = Node::new("section");
        let handed_out = custom.clone();
        let options = resolve(
            NotifyOptions::new().render(move |_| Ok(Rendered::Element(handed_out.clone()))),
        );
        let root = build(&surface, &options, noop()).unwrap().element;
        assert_eq!(root.children()[0], custom);
        assert!(root.find("nifty-toast__content").is_none());
    }

    #[test]
    fn failing_renderer_falls_back() {
        let surface = MemorySurface::new();
        let options = resolve(
            NotifyOptions::new()
                .message("fallback")
                .render(|_| Err(RenderError::new("boom"))),
        );
        let root = build(&surface, &options, noop()).unwrap().element;
        assert_eq!(root.find("nifty-toast__message").unwrap().text(), "fallback");
    }
}
