use std::path::PathBuf;

/// Result of an image rendering attempt, as seen by the reporting layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The image was written to this path
    Rendered(PathBuf),
    /// Rendering failed; the message explains why
    Failed(String),
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}
