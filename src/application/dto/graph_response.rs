use super::GraphRequest;
use crate::dependency_graph::domain::{DependencyGraph, ReportMetadata};
use std::collections::BTreeSet;

/// GraphResponse - everything one resolution run produced
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// The request this response answers
    pub request: GraphRequest,
    /// Direct dependencies of the (possibly version-pinned) root
    pub direct_dependencies: Vec<String>,
    /// Graph, cycles and load order of the traversal
    pub graph: DependencyGraph,
    /// Transitive reverse dependents of the root, when requested
    pub reverse_dependents: Option<BTreeSet<String>>,
    pub metadata: ReportMetadata,
}

impl GraphResponse {
    pub fn new(
        request: GraphRequest,
        direct_dependencies: Vec<String>,
        graph: DependencyGraph,
        reverse_dependents: Option<BTreeSet<String>>,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            request,
            direct_dependencies,
            graph,
            reverse_dependents,
            metadata,
        }
    }
}
