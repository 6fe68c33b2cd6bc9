/// Use cases orchestrating the graph core and the outbound ports
mod render_graph;
mod resolve_graph;

pub use render_graph::RenderGraphUseCase;
pub use resolve_graph::ResolveGraphUseCase;
