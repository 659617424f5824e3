use crate::config;
use crate::container::Containers;
use crate::factory;
use crate::lifecycle::{Phase, Resume, ToastInstance};
use crate::options::{NotifyArgs, NotifyOptions, ResolvedOptions, ToastType};
use crate::styles;
use crate::surface::Surface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shows, tracks and dismisses toasts on a single surface.
///
/// A `Toaster` is a cheap handle: clones share the same registry, containers and configuration.
/// All of that state lives on the UI thread, so the handle is neither `Send` nor `Sync`.
pub struct Toaster<S: Surface> {
    inner: Rc<Inner<S>>,
}

struct Inner<S: Surface> {
    surface: S,
    state: RefCell<State<S>>,
}

struct State<S: Surface> {
    config: NotifyOptions<S::Element>,
    toasts: HashMap<String, ToastInstance<S>>,
    containers: Containers<S::Element>,
    next_id: u64,
    next_serial: u64,
}

impl<S: Surface> State<S> {
    fn generate_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("toast-{}", self.next_id);
            if !self.toasts.contains_key(&id) {
                return id;
            }
        }
    }

    /// The toast registered under `id`, provided it is still the one identified by `serial`.
    fn live(&mut self, id: &str, serial: u64) -> Option<&mut ToastInstance<S>> {
        self.toasts
            .get_mut(id)
            .filter(|toast| toast.serial == serial)
    }
}

impl<S: Surface> Clone for Toaster<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Surface> PartialEq for Toaster<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: Surface> Toaster<S> {
    pub fn new(surface: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                surface,
                state: RefCell::new(State {
                    config: NotifyOptions::default(),
                    toasts: HashMap::new(),
                    containers: Containers::new(),
                    next_id: 0,
                    next_serial: 0,
                }),
            }),
        }
    }

    /// Shows a toast and returns its identifier, or `None` when there is no page to show it on.
    pub fn notify(&self, args: impl Into<NotifyArgs<S::Element>>) -> Option<String> {
        let surface = &self.inner.surface;
        if !surface.available() {
            log::debug!("notify: no rendering surface available");
            return None;
        }

        let call = args.into().options;
        let (options, serial) = {
            let mut state = self.inner.state.borrow_mut();
            let id = match call.id.clone().filter(|id| !id.is_empty()) {
                Some(id) => id,
                None => state.generate_id(),
            };
            state.next_serial += 1;
            let merged = state.config.clone().merge(&call);
            (merged.resolve(id), state.next_serial)
        };

        if options.inject_styles {
            styles::ensure(surface);
        }
        let container = self.inner.state.borrow_mut().containers.container_for(
            surface,
            options.position,
            &options.container_class,
        )?;

        // One element per id: a live toast with the same id leaves the page now. Its close
        // callback runs only once the new toast is registered.
        let id = options.id.clone();
        let replaced = self.inner.state.borrow_mut().toasts.remove(&id);
        if let Some(replaced) = &replaced {
            log::debug!("toast {}: replaced by a newer toast with the same id", id);
            surface.detach(&replaced.element);
        }

        let shown = match self.show(&container, options, serial) {
            Some(toast) => {
                let displaced = self
                    .inner
                    .state
                    .borrow_mut()
                    .toasts
                    .insert(id.clone(), toast);
                // A custom renderer may have shown a toast under the same id meanwhile.
                if let Some(displaced) = displaced {
                    self.finish(&id, displaced);
                }
                surface.next_frame(Box::new(self.handler(&id, serial, Self::reveal)));
                log::trace!("toast {}: shown", id);
                true
            }
            None => false,
        };

        if let Some(replaced) = replaced {
            self.finish(&id, replaced);
        }
        shown.then(|| id)
    }

    /// Builds the toast, attaches it to `container` and starts its countdown.
    fn show(
        &self,
        container: &S::Element,
        options: ResolvedOptions<S::Element>,
        serial: u64,
    ) -> Option<ToastInstance<S>> {
        let surface = &self.inner.surface;
        let id = options.id.clone();
        let close = Box::new(self.handler(&id, serial, Self::expire));
        let built = match factory::build(surface, &options, close) {
            Ok(built) => built,
            Err(e) => {
                log::error!("unable to build toast {}: {}", id, e);
                return None;
            }
        };
        let mut listeners = built.listeners;
        if options.pause_on_hover {
            match surface.on_hover(
                &built.element,
                Box::new(self.handler(&id, serial, Self::pause)),
                Box::new(self.handler(&id, serial, Self::resume)),
            ) {
                Ok(hover) => listeners.extend(hover),
                Err(e) => log::error!("unable to listen for hover on toast {}: {}", id, e),
            }
        }
        if let Err(e) = surface.append(container, &built.element) {
            log::error!("unable to attach toast {}: {}", id, e);
            return None;
        }

        let duration = options.duration;
        let mut toast = ToastInstance::new(serial, built.element, options, listeners);
        if duration > 0 {
            toast.arm(self.timer(&id, serial, duration), surface.now());
        }
        Some(toast)
    }

    pub fn info(&self, args: impl Into<NotifyArgs<S::Element>>) -> Option<String> {
        self.notify(args.into().with_type(ToastType::Info))
    }

    pub fn success(&self, args: impl Into<NotifyArgs<S::Element>>) -> Option<String> {
        self.notify(args.into().with_type(ToastType::Success))
    }

    pub fn error(&self, args: impl Into<NotifyArgs<S::Element>>) -> Option<String> {
        self.notify(args.into().with_type(ToastType::Error))
    }

    pub fn warning(&self, args: impl Into<NotifyArgs<S::Element>>) -> Option<String> {
        self.notify(args.into().with_type(ToastType::Warning))
    }

    /// Starts the exit transition of a toast. Unknown ids and toasts already on their way out
    /// are ignored.
    pub fn dismiss(&self, id: &str) {
        let surface = &self.inner.surface;
        let serial = {
            let mut state = self.inner.state.borrow_mut();
            match state.toasts.get_mut(id) {
                Some(toast) if toast.phase != Phase::Hiding => {
                    toast.cancel();
                    toast.phase = Phase::Hiding;
                    if let Err(e) = surface.add_class(&toast.element, config::HIDE_CLASS) {
                        log::error!("unable to hide toast {}: {}", id, e)
                    }
                    toast.serial
                }
                _ => return,
            }
        };

        log::trace!("toast {}: hiding", id);
        surface.defer(
            config::REMOVE_DELAY,
            Box::new(self.handler(id, serial, Self::remove)),
        );
    }

    /// Dismisses every toast currently shown.
    pub fn clear(&self) {
        let ids: Vec<String> = self.inner.state.borrow().toasts.keys().cloned().collect();
        log::trace!("clearing {} toasts", ids.len());
        for id in ids {
            self.dismiss(&id);
        }
    }

    /// Layers `options` over the current configuration for every subsequent toast.
    pub fn configure(&self, mut options: NotifyOptions<S::Element>) {
        if options.id.take().is_some() {
            log::warn!("configure: ignoring id, identifiers belong to a single toast");
        }
        let mut state = self.inner.state.borrow_mut();
        let config = std::mem::take(&mut state.config);
        state.config = config.merge(&options);
    }

    pub fn reset_configuration(&self) {
        self.inner.state.borrow_mut().config = NotifyOptions::default();
    }

    pub fn len(&self) -> usize {
        self.inner.state.borrow().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.state.borrow().toasts.contains_key(id)
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.state.borrow().toasts.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// The root element of a shown toast.
    pub fn element(&self, id: &str) -> Option<S::Element> {
        self.inner
            .state
            .borrow()
            .toasts
            .get(id)
            .map(|toast| toast.element.clone())
    }

    /// Wraps `action` for re-entry from a surface callback. The callback holds no strong
    /// reference, so it does nothing once every handle is gone.
    fn handler(&self, id: &str, serial: u64, action: fn(&Self, &str, u64)) -> impl Fn() + 'static {
        let inner = Rc::downgrade(&self.inner);
        let id = id.to_string();
        move || {
            if let Some(inner) = inner.upgrade() {
                action(&Toaster { inner }, &id, serial)
            }
        }
    }

    fn timer(&self, id: &str, serial: u64, delay: u32) -> S::Timer {
        self.inner
            .surface
            .schedule(delay, Box::new(self.handler(id, serial, Self::expire)))
    }

    fn reveal(&self, id: &str, serial: u64) {
        let mut state = self.inner.state.borrow_mut();
        if let Some(toast) = state.live(id, serial) {
            if toast.phase == Phase::Entering {
                toast.phase = Phase::Visible;
                if let Err(e) = self
                    .inner
                    .surface
                    .remove_class(&toast.element, config::HIDE_CLASS)
                {
                    log::error!("unable to reveal toast {}: {}", id, e)
                }
            }
        }
    }

    fn expire(&self, id: &str, serial: u64) {
        let current = self.inner.state.borrow_mut().live(id, serial).is_some();
        if current {
            self.dismiss(id);
        }
    }

    fn pause(&self, id: &str, serial: u64) {
        let now = self.inner.surface.now();
        if let Some(toast) = self.inner.state.borrow_mut().live(id, serial) {
            if toast.pause(now) {
                log::trace!("toast {}: paused", id);
            }
        }
    }

    fn resume(&self, id: &str, serial: u64) {
        let expired = {
            let mut state = self.inner.state.borrow_mut();
            match state.live(id, serial) {
                Some(toast) => match toast.resume() {
                    Resume::Idle => false,
                    Resume::Rearm(delay) => {
                        log::trace!("toast {}: resuming with {}ms left", id, delay);
                        toast.arm(self.timer(id, serial, delay), self.inner.surface.now());
                        false
                    }
                    Resume::Expired => true,
                },
                None => false,
            }
        };
        if expired {
            self.dismiss(id);
        }
    }

    fn remove(&self, id: &str, serial: u64) {
        let toast = {
            let mut state = self.inner.state.borrow_mut();
            if state.live(id, serial).is_none() {
                return;
            }
            state.toasts.remove(id)
        };
        if let Some(toast) = toast {
            self.finish(id, toast);
        }
    }

    fn finish(&self, id: &str, toast: ToastInstance<S>) {
        self.inner.surface.detach(&toast.element);
        let on_close = toast.options.on_close.clone();
        drop(toast);
        log::trace!("toast {}: removed", id);
        if let Some(on_close) = on_close {
            on_close();
        }
    }
}
