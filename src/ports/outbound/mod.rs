/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry data, console, renderer, etc.).
pub mod dependency_source;
pub mod formatter;
pub mod graph_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_reader;

pub use dependency_source::DependencySource;
pub use formatter::GraphFormatter;
pub use graph_renderer::{GraphRenderer, RenderError};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_reader::RegistryReader;
