use crate::error::SurfaceError;

/// Everything the toaster needs from the page it renders into.
///
/// Implementations are driven from a single UI thread; none of the callbacks handed over here
/// may be invoked synchronously from within the call that registers them.
pub trait Surface: 'static {
    /// Handle to a node in the visual tree.
    type Element: Clone + 'static;
    /// A pending scheduled task. Dropping it cancels the task.
    type Timer: 'static;
    /// An attached event handler. Dropping it detaches the handler.
    type Listener: 'static;

    /// Whether there is a page to render into at all.
    fn available(&self) -> bool;

    /// Milliseconds on a monotonic clock.
    fn now(&self) -> f64;

    fn has_stylesheet(&self, id: &str) -> bool;

    fn insert_stylesheet(&self, id: &str, css: &str) -> Result<(), SurfaceError>;

    fn create_element(&self, tag: &str) -> Result<Self::Element, SurfaceError>;

    /// Adds every whitespace separated class in `classes`.
    fn add_class(&self, element: &Self::Element, classes: &str) -> Result<(), SurfaceError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), SurfaceError>;

    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError>;

    /// Sets the text content, never interpreted as markup.
    fn set_text(&self, element: &Self::Element, text: &str);

    fn set_markup(&self, element: &Self::Element, markup: &str);

    fn append(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), SurfaceError>;

    /// Attaches a top level element to the page.
    fn attach(&self, element: &Self::Element) -> Result<(), SurfaceError>;

    /// Detaches an element from its parent. Detached elements are left alone.
    fn detach(&self, element: &Self::Element);

    fn schedule(&self, delay: u32, task: Box<dyn FnOnce()>) -> Self::Timer;

    /// Schedules a task that cannot be cancelled.
    fn defer(&self, delay: u32, task: Box<dyn FnOnce()>);

    /// Runs `task` on the next rendering opportunity.
    fn next_frame(&self, task: Box<dyn FnOnce()>);

    fn on_hover(
        &self,
        element: &Self::Element,
        enter: Box<dyn Fn()>,
        leave: Box<dyn Fn()>,
    ) -> Result<Vec<Self::Listener>, SurfaceError>;

    fn on_click(
        &self,
        element: &Self::Element,
        handler: Box<dyn Fn()>,
    ) -> Result<Self::Listener, SurfaceError>;
}
