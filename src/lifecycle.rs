use crate::options::ResolvedOptions;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Attached but still carrying the hide class.
    Entering,
    Visible,
    /// Exit transition running, removal scheduled.
    Hiding,
}

/// What to do when the pointer leaves a paused toast.
#[derive(Debug, PartialEq)]
pub(crate) enum Resume {
    /// Nothing was paused.
    Idle,
    /// Restart the countdown with the remaining milliseconds.
    Rearm(u32),
    /// The countdown ran out while paused.
    Expired,
}

/// A toast on the page, owned by the toaster's registry.
///
/// Holds at most one pending auto-dismiss timer; arming a new one always cancels the previous.
pub(crate) struct ToastInstance<S: Surface> {
    /// Distinguishes this toast from later ones reusing the same id.
    pub(crate) serial: u64,
    pub(crate) element: S::Element,
    pub(crate) options: ResolvedOptions<S::Element>,
    pub(crate) phase: Phase,
    timer: Option<S::Timer>,
    remaining: f64,
    started: f64,
    _listeners: Vec<S::Listener>,
}

impl<S: Surface> ToastInstance<S> {
    pub(crate) fn new(
        serial: u64,
        element: S::Element,
        options: ResolvedOptions<S::Element>,
        listeners: Vec<S::Listener>,
    ) -> Self {
        let remaining = f64::from(options.duration);
        Self {
            serial,
            element,
            options,
            phase: Phase::Entering,
            timer: None,
            remaining,
            started: 0.0,
            _listeners: listeners,
        }
    }

    pub(crate) fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub(crate) fn arm(&mut self, timer: S::Timer, now: f64) {
        self.cancel();
        self.timer = Some(timer);
        self.started = now;
    }

    pub(crate) fn cancel(&mut self) {
        self.timer = None;
    }

    /// Stops the countdown, keeping track of how much of it is left.
    pub(crate) fn pause(&mut self, now: f64) -> bool {
        if !self.options.pause_on_hover || self.phase == Phase::Hiding {
            return false;
        }
        match self.timer.take() {
            Some(timer) => {
                drop(timer);
                self.remaining -= now - self.started;
                true
            }
            None => false,
        }
    }

    pub(crate) fn resume(&self) -> Resume {
        if !self.options.pause_on_hover
            || self.phase == Phase::Hiding
            || self.options.is_sticky()
            || self.has_timer()
        {
            return Resume::Idle;
        }
        if self.remaining > 0.0 {
            Resume::Rearm(self.remaining.ceil() as u32)
        } else {
            Resume::Expired
        }
    }
}
