use thiserror::Error;

/// A failed operation against the rendering surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no rendering surface is available")]
    Unavailable,
    #[error("surface operation failed: {0}")]
    Operation(String),
}

/// A custom renderer could not produce content for a toast.
#[derive(Debug, Error)]
#[error("render failed: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
