use crate::config;
use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Invoked once when a toast has been removed from the page.
pub type OnClose = Rc<dyn Fn()>;

/// Produces the content of a toast in place of the default layout.
pub type Renderer<E> = Rc<dyn Fn(&RenderContext) -> Result<Rendered<E>, RenderError>>;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl ToastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastType::Info => "info",
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Warning => "warning",
        }
    }

    /// Errors and warnings interrupt assistive technology, everything else waits its turn.
    pub(crate) fn is_urgent(&self) -> bool {
        matches!(self, ToastType::Error | ToastType::Warning)
    }
}

impl FromStr for ToastType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(ToastType::Info),
            "success" => Ok(ToastType::Success),
            "error" => Ok(ToastType::Error),
            "warning" => Ok(ToastType::Warning),
            _ => Err(ParseError::new("toast type", s)),
        }
    }
}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Position::TopLeft),
            "top-center" => Ok(Position::TopCenter),
            "top-right" => Ok(Position::TopRight),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-center" => Ok(Position::BottomCenter),
            "bottom-right" => Ok(Position::BottomRight),
            _ => Err(ParseError::new("position", s)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// What a custom renderer sees of the toast it is rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderContext {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub toast_type: ToastType,
}

/// Output of a custom renderer.
pub enum Rendered<E> {
    /// Inserted as markup, without escaping.
    Markup(String),
    /// Used as the toast content as-is.
    Element(E),
}

/// Caller supplied display options. Every field is optional; unset fields fall back to the
/// configured values and then to the built-in defaults.
pub struct NotifyOptions<E> {
    pub id: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub toast_type: Option<ToastType>,
    /// Milliseconds before the toast dismisses itself, `0` keeps it until dismissed.
    pub duration: Option<u32>,
    pub closable: Option<bool>,
    pub pause_on_hover: Option<bool>,
    pub position: Option<Position>,
    /// Appended to the container class names.
    pub container_class: Option<String>,
    /// Appended to the toast class names.
    pub toast_class: Option<String>,
    pub inject_styles: Option<bool>,
    pub on_close: Option<OnClose>,
    pub render: Option<Renderer<E>>,
}

impl<E> Default for NotifyOptions<E> {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            message: None,
            toast_type: None,
            duration: None,
            closable: None,
            pause_on_hover: None,
            position: None,
            container_class: None,
            toast_class: None,
            inject_styles: None,
            on_close: None,
            render: None,
        }
    }
}

impl<E> Clone for NotifyOptions<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            toast_type: self.toast_type,
            duration: self.duration,
            closable: self.closable,
            pause_on_hover: self.pause_on_hover,
            position: self.position,
            container_class: self.container_class.clone(),
            toast_class: self.toast_class.clone(),
            inject_styles: self.inject_styles,
            on_close: self.on_close.clone(),
            render: self.render.clone(),
        }
    }
}

/// Callbacks compare by identity.
impl<E> PartialEq for NotifyOptions<E> {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        self.id == other.id
            && self.title == other.title
            && self.message == other.message
            && self.toast_type == other.toast_type
            && self.duration == other.duration
            && self.closable == other.closable
            && self.pause_on_hover == other.pause_on_hover
            && self.position == other.position
            && self.container_class == other.container_class
            && self.toast_class == other.toast_class
            && self.inject_styles == other.inject_styles
            && same(&self.on_close, &other.on_close)
            && same(&self.render, &other.render)
    }
}

impl<E> NotifyOptions<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bottom layer every toast is resolved against.
    pub fn defaults() -> Self {
        Self {
            toast_type: Some(ToastType::Info),
            duration: Some(config::DEFAULT_DURATION),
            closable: Some(true),
            pause_on_hover: Some(true),
            position: Some(Position::TopRight),
            inject_styles: Some(true),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = Some(toast_type);
        self
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    pub fn pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    pub fn toast_class(mut self, class: impl Into<String>) -> Self {
        self.toast_class = Some(class.into());
        self
    }

    pub fn inject_styles(mut self, inject_styles: bool) -> Self {
        self.inject_styles = Some(inject_styles);
        self
    }

    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(on_close));
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(&RenderContext) -> Result<Rendered<E>, RenderError> + 'static,
    ) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Layers `over` on top of `self`: every field set in `over` wins.
    pub fn merge(self, over: &NotifyOptions<E>) -> Self {
        Self {
            id: over.id.clone().or(self.id),
            title: over.title.clone().or(self.title),
            message: over.message.clone().or(self.message),
            toast_type: over.toast_type.or(self.toast_type),
            duration: over.duration.or(self.duration),
            closable: over.closable.or(self.closable),
            pause_on_hover: over.pause_on_hover.or(self.pause_on_hover),
            position: over.position.or(self.position),
            container_class: over.container_class.clone().or(self.container_class),
            toast_class: over.toast_class.clone().or(self.toast_class),
            inject_styles: over.inject_styles.or(self.inject_styles),
            on_close: over.on_close.clone().or(self.on_close),
            render: over.render.clone().or(self.render),
        }
    }

    /// Fills every remaining gap from the built-in defaults.
    pub(crate) fn resolve(self, id: String) -> ResolvedOptions<E> {
        let defaults = Self::defaults().merge(&self);
        ResolvedOptions {
            id,
            title: defaults.title.unwrap_or_default(),
            message: defaults.message.unwrap_or_default(),
            toast_type: defaults.toast_type.unwrap_or_default(),
            duration: defaults.duration.unwrap_or(config::DEFAULT_DURATION),
            closable: defaults.closable.unwrap_or(true),
            pause_on_hover: defaults.pause_on_hover.unwrap_or(true),
            position: defaults.position.unwrap_or_default(),
            container_class: defaults.container_class.unwrap_or_default(),
            toast_class: defaults.toast_class.unwrap_or_default(),
            inject_styles: defaults.inject_styles.unwrap_or(true),
            on_close: defaults.on_close,
            render: defaults.render,
        }
    }
}

/// Options with every layer applied.
pub struct ResolvedOptions<E> {
    pub id: String,
    pub title: String,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: u32,
    pub closable: bool,
    pub pause_on_hover: bool,
    pub position: Position,
    pub container_class: String,
    pub toast_class: String,
    pub inject_styles: bool,
    pub on_close: Option<OnClose>,
    pub render: Option<Renderer<E>>,
}

impl<E> ResolvedOptions<E> {
    pub fn is_sticky(&self) -> bool {
        self.duration == 0
    }

    pub(crate) fn context(&self) -> RenderContext {
        RenderContext {
            id: self.id.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            toast_type: self.toast_type,
        }
    }
}

/// Arguments accepted by the notify entry points: a bare message, a full options record, or a
/// message together with further options.
pub struct NotifyArgs<E> {
    pub(crate) options: NotifyOptions<E>,
}

impl<E> NotifyArgs<E> {
    /// The positional `message` takes precedence over `options.message`.
    pub fn message(message: impl Into<String>, options: NotifyOptions<E>) -> Self {
        Self {
            options: NotifyOptions {
                message: Some(message.into()),
                ..options
            },
        }
    }

    pub(crate) fn with_type(mut self, toast_type: ToastType) -> Self {
        self.options.toast_type = Some(toast_type);
        self
    }
}

impl<E> From<&str> for NotifyArgs<E> {
    fn from(message: &str) -> Self {
        NotifyArgs::message(message, NotifyOptions::default())
    }
}

impl<E> From<String> for NotifyArgs<E> {
    fn from(message: String) -> Self {
        NotifyArgs::message(message, NotifyOptions::default())
    }
}

impl<E> From<NotifyOptions<E>> for NotifyArgs<E> {
    fn from(options: NotifyOptions<E>) -> Self {
        Self { options }
    }
}

impl<E, M: Into<String>> From<(M, NotifyOptions<E>)> for NotifyArgs<E> {
    fn from((message, options): (M, NotifyOptions<E>)) -> Self {
        NotifyArgs::message(message, options)
    }
}
