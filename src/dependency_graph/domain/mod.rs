pub mod dependency_graph;
pub mod package;
pub mod report_metadata;

pub use dependency_graph::{Cycle, DependencyGraph};
pub use package::{DependencyRecord, PackageId, PackageName};
pub use report_metadata::ReportMetadata;
