use crate::dependency_graph::domain::PackageId;

/// DependencySource port consumed by the graph builder and reverse queries
///
/// Lookups are infallible by contract: an implementation that cannot reach
/// its backing data answers with an empty list and reports the problem
/// out of band.
pub trait DependencySource {
    /// Direct dependencies declared by `package`, in declared order.
    ///
    /// Unknown packages yield an empty list.
    fn dependencies(&self, package: &PackageId) -> Vec<String>;

    /// Packages that directly declare `name` as a dependency
    fn reverse_dependents(&self, name: &str) -> Vec<String>;
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn dependencies(&self, package: &PackageId) -> Vec<String> {
        (**self).dependencies(package)
    }

    fn reverse_dependents(&self, name: &str) -> Vec<String> {
        (**self).reverse_dependents(name)
    }
}
