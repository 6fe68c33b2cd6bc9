/// Data Transfer Objects for application layer
mod graph_request;
mod graph_response;
mod output_format;
mod render_outcome;

pub use graph_request::GraphRequest;
pub use graph_response::GraphResponse;
pub use output_format::OutputFormat;
pub use render_outcome::RenderOutcome;
