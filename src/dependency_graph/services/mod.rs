mod graph_builder;
mod graph_description;
mod reverse_closure;
mod traversal_policy;

pub use graph_builder::GraphBuilder;
pub use graph_description::to_graph_description;
pub use reverse_closure::reverse_closure;
pub use traversal_policy::TraversalPolicy;
