use crate::dependency_graph::domain::PackageId;
use crate::dependency_graph::services::TraversalPolicy;

/// GraphRequest - parameters of one resolution run
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Traversal root, optionally pinned to a version
    pub package: PackageId,
    /// Repository locator as configured, echoed in reports
    pub repository: String,
    /// Depth ceiling and exclusion applied during expansion
    pub policy: TraversalPolicy,
    /// Whether to compute the transitive reverse dependents of the root
    pub include_reverse: bool,
    /// Depth bound for the reverse closure (`None` = unbounded)
    pub reverse_depth: Option<usize>,
}

impl GraphRequest {
    pub fn new(package: PackageId, repository: String, policy: TraversalPolicy) -> Self {
        Self {
            package,
            repository,
            policy,
            include_reverse: false,
            reverse_depth: None,
        }
    }

    pub fn with_reverse(mut self, reverse_depth: Option<usize>) -> Self {
        self.include_reverse = true;
        self.reverse_depth = reverse_depth;
        self
    }
}
