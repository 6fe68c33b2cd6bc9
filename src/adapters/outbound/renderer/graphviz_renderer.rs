use crate::ports::outbound::{GraphRenderer, RenderError};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::Command;

/// Renderer command used when none is configured
pub const DEFAULT_RENDERER: &str = "dot";

/// Output formats the renderer is asked for, keyed by file extension
const SUPPORTED_FORMATS: &[&str] = &["png", "svg", "pdf"];

/// Format used when the output path has no recognized extension
const DEFAULT_FORMAT: &str = "png";

/// GraphvizRenderer adapter invoking an external Graphviz-compatible command
///
/// The description is written to a temporary `.dot` file which is removed
/// when the render call returns, whatever the outcome. The command is run
/// as `<command> -T<format> <description> -o <output>`.
pub struct GraphvizRenderer {
    command: String,
}

impl GraphvizRenderer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Picks the `-T` format from the output path's extension
    pub fn output_format(output_path: &Path) -> &'static str {
        output_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .and_then(|ext| SUPPORTED_FORMATS.iter().copied().find(|f| *f == ext))
            .unwrap_or(DEFAULT_FORMAT)
    }

    fn validate_output_path(output_path: &Path) -> Result<(), RenderError> {
        if output_path.as_os_str().is_empty() {
            return Err(RenderError::InvalidOutputPath {
                path: output_path.to_path_buf(),
                reason: "path is empty".to_string(),
            });
        }
        if let Some(parent) = output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(RenderError::InvalidOutputPath {
                    path: output_path.to_path_buf(),
                    reason: format!("directory does not exist: {}", parent.display()),
                });
            }
        }
        if output_path.is_symlink() {
            return Err(RenderError::InvalidOutputPath {
                path: output_path.to_path_buf(),
                reason: "refusing to write through a symbolic link".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, description: &str, output_path: &Path) -> Result<(), RenderError> {
        Self::validate_output_path(output_path)?;

        let mut description_file = tempfile::Builder::new()
            .prefix("depviz-")
            .suffix(".dot")
            .tempfile()
            .map_err(RenderError::TempFile)?;
        description_file
            .write_all(description.as_bytes())
            .and_then(|_| description_file.flush())
            .map_err(RenderError::TempFile)?;

        let format = Self::output_format(output_path);
        tracing::debug!(
            command = %self.command,
            format,
            output = %output_path.display(),
            "invoking renderer"
        );

        let output = Command::new(&self.command)
            .arg(format!("-T{}", format))
            .arg(description_file.path())
            .arg("-o")
            .arg(output_path)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RenderError::RendererNotFound {
                    command: self.command.clone(),
                },
                _ => RenderError::RendererFailed {
                    command: self.command.clone(),
                    status: "could not be started".to_string(),
                    stderr: e.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(RenderError::RendererFailed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
