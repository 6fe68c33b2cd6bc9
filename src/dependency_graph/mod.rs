/// Dependency graph core - domain model and traversal/query services
///
/// Nothing in this module performs I/O; backing data is reached through the
/// `DependencySource` port.
pub mod domain;
pub mod services;
