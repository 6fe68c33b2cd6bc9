use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reasons at the rendering boundary
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Renderer '{command}' was not found\n\n💡 Hint: Install Graphviz or set 'renderer' in the config file")]
    RendererNotFound { command: String },

    #[error("Renderer '{command}' failed ({status})\nDetails: {stderr}")]
    RendererFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to prepare temporary graph description\nDetails: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Invalid image path: {path}\nReason: {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },
}

/// GraphRenderer port: turns a textual graph description into an image
///
/// The renderer itself is a black box; all that is observable is success
/// or a failure reason.
pub trait GraphRenderer {
    /// Renders `description` into `output_path`
    ///
    /// # Errors
    /// Returns a [`RenderError`] when the renderer is missing, exits with
    /// a non-zero status, or the temporary description cannot be written
    fn render(&self, description: &str, output_path: &Path) -> Result<(), RenderError>;
}
