use crate::application::dto::GraphResponse;
use crate::dependency_graph::services::to_graph_description;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// DotFormatter adapter emitting the Graphviz description of the graph
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, response: &GraphResponse) -> Result<String> {
        Ok(to_graph_description(&response.graph))
    }
}
