//! Toast notifications for web pages.
//!
//! A [`Toaster`] owns the registry of shown toasts, the per-position containers they stack in
//! and the process-wide configuration. It renders through a [`Surface`]: [`WebSurface`] for the
//! browser page, or any other implementation (tests use an in-memory one).
//!
//! ```no_run
//! use nifty_toast::{NotifyOptions, Position, Toaster, WebSurface};
//!
//! let toaster = Toaster::new(WebSurface);
//! toaster.configure(NotifyOptions::new().position(Position::BottomRight));
//! if let Some(id) = toaster.success("Saved") {
//!     toaster.dismiss(&id);
//! }
//! ```

mod bindings;
#[cfg(feature = "yew")]
pub mod components;
mod config;
mod container;
mod error;
mod factory;
mod lifecycle;
mod options;
mod styles;
mod surface;
#[cfg(test)]
mod testing;
mod toaster;
mod web;

pub use bindings::init_logging;
pub use error::{RenderError, SurfaceError};
pub use options::{
    NotifyArgs, NotifyOptions, OnClose, ParseError, Position, RenderContext, Rendered,
    Renderer, ResolvedOptions, ToastType,
};
pub use surface::Surface;
pub use toaster::Toaster;
pub use web::WebSurface;
