//! depviz - dependency graph resolver and visualizer
//!
//! This library resolves the transitive dependency graph of a package from a
//! dependency source, detects cycles, records a load order, answers
//! reverse-dependency queries and exports the graph as Graphviz text.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): graph model, traversal and queries
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depviz::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let progress_reporter = StderrProgressReporter::new();
//! let source = CachingDependencySource::new(StaticRegistry::demo(), &progress_reporter);
//! let use_case = ResolveGraphUseCase::new(source, &progress_reporter);
//!
//! let request = GraphRequest::new(
//!     PackageId::new("serde_json"),
//!     "builtin:demo".to_string(),
//!     TraversalPolicy::new(Some(3), None)?,
//! );
//! let response = use_case.execute(request)?;
//!
//! println!("{}", to_graph_description(&response.graph));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::registry::{
        open_registry, CachingDependencySource, RegistryLocator, StaticRegistry,
        TextFileRegistry,
    };
    pub use crate::adapters::outbound::renderer::GraphvizRenderer;
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat, RenderOutcome};
    pub use crate::application::use_cases::{RenderGraphUseCase, ResolveGraphUseCase};
    pub use crate::dependency_graph::domain::{
        Cycle, DependencyGraph, DependencyRecord, PackageId, PackageName,
    };
    pub use crate::dependency_graph::services::{
        reverse_closure, to_graph_description, GraphBuilder, TraversalPolicy,
    };
    pub use crate::ports::outbound::{
        DependencySource, GraphFormatter, GraphRenderer, OutputPresenter, ProgressReporter,
        RegistryReader,
    };
    pub use crate::shared::Result;
}
