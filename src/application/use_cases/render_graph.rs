use crate::application::dto::RenderOutcome;
use crate::ports::outbound::{GraphRenderer, ProgressReporter};
use std::path::Path;

/// RenderGraphUseCase - hands a graph description to the external renderer
///
/// Rendering failures never propagate as errors; they come back as
/// [`RenderOutcome::Failed`] after being reported.
pub struct RenderGraphUseCase<R, PR> {
    renderer: R,
    progress_reporter: PR,
}

impl<R, PR> RenderGraphUseCase<R, PR>
where
    R: GraphRenderer,
    PR: ProgressReporter,
{
    pub fn new(renderer: R, progress_reporter: PR) -> Self {
        Self {
            renderer,
            progress_reporter,
        }
    }

    pub fn render_to_image(&self, description: &str, output_path: &Path) -> RenderOutcome {
        self.progress_reporter.report(&format!(
            "🖼️  Rendering graph image to {}...",
            output_path.display()
        ));

        match self.renderer.render(description, output_path) {
            Ok(()) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Graph image written: {}",
                    output_path.display()
                ));
                RenderOutcome::Rendered(output_path.to_path_buf())
            }
            Err(e) => {
                tracing::warn!(error = %e, "rendering failed");
                let message = format!("❌ Could not render graph image: {}", e);
                self.progress_reporter.report_error(&message);
                RenderOutcome::Failed(message)
            }
        }
    }
}
