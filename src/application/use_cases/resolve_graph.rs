use crate::application::dto::{GraphRequest, GraphResponse};
use crate::dependency_graph::domain::ReportMetadata;
use crate::dependency_graph::services::{reverse_closure, GraphBuilder};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::Result;

/// Name stamped into report metadata
const TOOL_NAME: &str = "depviz";

/// ResolveGraphUseCase - resolves one package into a dependency graph
///
/// # Type Parameters
/// * `S` - DependencySource implementation (usually the caching adapter)
/// * `PR` - ProgressReporter implementation
pub struct ResolveGraphUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> ResolveGraphUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the resolution
    ///
    /// The reverse closure, when requested, is computed before any forward
    /// lookup so a lazily built reverse index comes from a full registry
    /// scan rather than from the forward lookups of the traversal.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies of {} from {}",
            request.package, request.repository
        ));

        // Step 1: Reverse closure
        let reverse_dependents = if request.include_reverse {
            self.progress_reporter.report(&format!(
                "🔁 Collecting packages that depend on {}...",
                request.package.name()
            ));
            let dependents =
                reverse_closure(&self.source, request.package.name(), request.reverse_depth);
            self.progress_reporter
                .report(&format!("   - Reverse dependents: {}", dependents.len()));
            Some(dependents)
        } else {
            None
        };

        // Step 2: Direct dependencies of the pinned root
        let direct_dependencies = self.source.dependencies(&request.package);
        self.progress_reporter.report(&format!(
            "   - Direct dependencies: {}",
            direct_dependencies.len()
        ));

        // Step 3: Traversal
        if request.policy.excludes(request.package.name()) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Root package '{}' matches the exclusion substring; the graph is empty.",
                request.package.name()
            ));
        }

        let mut builder = GraphBuilder::new(&self.source);
        builder.expand(&request.package, &request.policy);
        let graph = builder.into_graph();

        self.progress_reporter.report_completion(&format!(
            "📊 Graph: {} package(s), {} edge(s)",
            graph.package_count(),
            graph.edge_count()
        ));
        if graph.has_cycles() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} dependency cycle(s) detected",
                graph.cycles().len()
            ));
        }

        // Step 4: Metadata
        let metadata = ReportMetadata::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"));

        Ok(GraphResponse::new(
            request,
            direct_dependencies,
            graph,
            reverse_dependents,
            metadata,
        ))
    }
}
