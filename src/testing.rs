//! In-memory surface with a virtual clock, used by the unit tests.

use crate::error::SurfaceError;
use crate::surface::Surface;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Clone)]
pub(crate) struct Node(Rc<NodeData>);

struct NodeData {
    tag: String,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    markup: RefCell<Option<String>>,
    children: RefCell<Vec<Node>>,
    parent: RefCell<Weak<NodeData>>,
    handlers: RefCell<Vec<Handler>>,
}

struct Handler {
    id: u64,
    event: &'static str,
    callback: Rc<dyn Fn()>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} class={:?}>", self.0.tag, self.0.classes.borrow())
    }
}

impl Node {
    pub(crate) fn new(tag: &str) -> Self {
        Node(Rc::new(NodeData {
            tag: tag.to_string(),
            classes: RefCell::new(Vec::new()),
            attributes: RefCell::new(BTreeMap::new()),
            text: RefCell::new(String::new()),
            markup: RefCell::new(None),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            handlers: RefCell::new(Vec::new()),
        }))
    }

    pub(crate) fn tag(&self) -> String {
        self.0.tag.clone()
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    pub(crate) fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub(crate) fn markup(&self) -> Option<String> {
        self.0.markup.borrow().clone()
    }

    pub(crate) fn children(&self) -> Vec<Node> {
        self.0.children.borrow().clone()
    }

    pub(crate) fn parent(&self) -> Option<Node> {
        self.0.parent.borrow().upgrade().map(Node)
    }

    /// Depth first search through the descendants.
    pub(crate) fn find(&self, class: &str) -> Option<Node> {
        for child in self.children() {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find(class) {
                return Some(found);
            }
        }
        None
    }

    pub(crate) fn handler_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    fn fire(&self, event: &str) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .0
            .handlers
            .borrow()
            .iter()
            .filter(|h| h.event == event)
            .map(|h| h.callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

struct Task {
    id: u64,
    due: f64,
    run: Box<dyn FnOnce()>,
}

struct Shared {
    clock: Cell<f64>,
    next_id: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Shared {
    fn next_id(&self) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

#[derive(Clone)]
pub(crate) struct MemorySurface {
    available: Rc<Cell<bool>>,
    body: Node,
    stylesheets: Rc<RefCell<Vec<(String, String)>>>,
    shared: Rc<Shared>,
}

pub(crate) struct MemoryTimer {
    id: u64,
    shared: Weak<Shared>,
}

impl Drop for MemoryTimer {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.tasks.borrow_mut().retain(|task| task.id != self.id);
        }
    }
}

pub(crate) struct MemoryListener {
    id: u64,
    node: Node,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        self.node
            .0
            .handlers
            .borrow_mut()
            .retain(|handler| handler.id != self.id);
    }
}

impl MemorySurface {
    pub(crate) fn new() -> Self {
        Self {
            available: Rc::new(Cell::new(true)),
            body: Node::new("body"),
            stylesheets: Rc::new(RefCell::new(Vec::new())),
            shared: Rc::new(Shared {
                clock: Cell::new(0.0),
                next_id: Cell::new(0),
                tasks: RefCell::new(Vec::new()),
                frames: RefCell::new(Vec::new()),
            }),
        }
    }

    /// A surface for a context without a page.
    pub(crate) fn headless() -> Self {
        let surface = Self::new();
        surface.available.set(false);
        surface
    }

    pub(crate) fn body(&self) -> Node {
        self.body.clone()
    }

    pub(crate) fn stylesheet_count(&self) -> usize {
        self.stylesheets.borrow().len()
    }

    pub(crate) fn pending_tasks(&self) -> usize {
        self.shared.tasks.borrow().len()
    }

    pub(crate) fn clock(&self) -> f64 {
        self.shared.clock.get()
    }

    pub(crate) fn flush_frames(&self) {
        let frames: Vec<Box<dyn FnOnce()>> = self.shared.frames.borrow_mut().drain(..).collect();
        for frame in frames {
            frame();
        }
    }

    /// Moves the clock forward, running frame callbacks and then every task falling due, in
    /// order.
    pub(crate) fn advance(&self, ms: u32) {
        self.flush_frames();
        let target = self.shared.clock.get() + f64::from(ms);
        loop {
            let next = {
                let mut tasks = self.shared.tasks.borrow_mut();
                let due = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
                    .map(|(index, _)| index);
                due.map(|index| tasks.remove(index))
            };
            match next {
                Some(task) => {
                    self.shared.clock.set(task.due);
                    (task.run)();
                }
                None => break,
            }
        }
        self.shared.clock.set(target);
    }

    /// Moves the clock forward without running anything, as when timers fire late.
    pub(crate) fn stall(&self, ms: u32) {
        self.shared.clock.set(self.shared.clock.get() + f64::from(ms));
    }

    pub(crate) fn pointer_enter(&self, node: &Node) {
        node.fire("mouseenter");
    }

    pub(crate) fn pointer_leave(&self, node: &Node) {
        node.fire("mouseleave");
    }

    pub(crate) fn click(&self, node: &Node) {
        node.fire("click");
    }

    fn listen(&self, node: &Node, event: &'static str, callback: Box<dyn Fn()>) -> MemoryListener {
        let id = self.shared.next_id();
        node.0.handlers.borrow_mut().push(Handler {
            id,
            event,
            callback: Rc::from(callback),
        });
        MemoryListener {
            id,
            node: node.clone(),
        }
    }
}

impl Surface for MemorySurface {
    type Element = Node;
    type Timer = MemoryTimer;
    type Listener = MemoryListener;

    fn available(&self) -> bool {
        self.available.get()
    }

    fn now(&self) -> f64 {
        self.shared.clock.get()
    }

    fn has_stylesheet(&self, id: &str) -> bool {
        self.stylesheets.borrow().iter().any(|(sheet, _)| sheet == id)
    }

    fn insert_stylesheet(&self, id: &str, css: &str) -> Result<(), SurfaceError> {
        self.stylesheets
            .borrow_mut()
            .push((id.to_string(), css.to_string()));
        Ok(())
    }

    fn create_element(&self, tag: &str) -> Result<Node, SurfaceError> {
        Ok(Node::new(tag))
    }

    fn add_class(&self, element: &Node, classes: &str) -> Result<(), SurfaceError> {
        let mut list = element.0.classes.borrow_mut();
        for class in classes.split_whitespace() {
            if !list.iter().any(|c| c == class) {
                list.push(class.to_string());
            }
        }
        Ok(())
    }

    fn remove_class(&self, element: &Node, class: &str) -> Result<(), SurfaceError> {
        element.0.classes.borrow_mut().retain(|c| c != class);
        Ok(())
    }

    fn set_attribute(&self, element: &Node, name: &str, value: &str) -> Result<(), SurfaceError> {
        element
            .0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_text(&self, element: &Node, text: &str) {
        *element.0.text.borrow_mut() = text.to_string();
    }

    fn set_markup(&self, element: &Node, markup: &str) {
        *element.0.markup.borrow_mut() = Some(markup.to_string());
    }

    fn append(&self, parent: &Node, child: &Node) -> Result<(), SurfaceError> {
        self.detach(child);
        *child.0.parent.borrow_mut() = Rc::downgrade(&parent.0);
        parent.0.children.borrow_mut().push(child.clone());
        Ok(())
    }

    fn attach(&self, element: &Node) -> Result<(), SurfaceError> {
        let body = self.body.clone();
        self.append(&body, element)
    }

    fn detach(&self, element: &Node) {
        if let Some(parent) = element.parent() {
            parent.0.children.borrow_mut().retain(|child| child != element);
        }
        *element.0.parent.borrow_mut() = Weak::new();
    }

    fn schedule(&self, delay: u32, task: Box<dyn FnOnce()>) -> MemoryTimer {
        let id = self.shared.next_id();
        self.shared.tasks.borrow_mut().push(Task {
            id,
            due: self.shared.clock.get() + f64::from(delay),
            run: task,
        });
        MemoryTimer {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    fn defer(&self, delay: u32, task: Box<dyn FnOnce()>) {
        std::mem::forget(self.schedule(delay, task));
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) {
        self.shared.frames.borrow_mut().push(task);
    }

    fn on_hover(
        &self,
        element: &Node,
        enter: Box<dyn Fn()>,
        leave: Box<dyn Fn()>,
    ) -> Result<Vec<MemoryListener>, SurfaceError> {
        Ok(vec![
            self.listen(element, "mouseenter", enter),
            self.listen(element, "mouseleave", leave),
        ])
    }

    fn on_click(&self, element: &Node, handler: Box<dyn Fn()>) -> Result<MemoryListener, SurfaceError> {
        Ok(self.listen(element, "click", handler))
    }
}
