use crate::dependency_graph::domain::{DependencyRecord, PackageId};
use crate::shared::Result;

/// RegistryReader port for the raw backing data of a package registry
///
/// Implementations do no caching; every call may hit the backing data.
pub trait RegistryReader {
    /// Returns the dependency names of the first record matching `package`
    ///
    /// # Errors
    /// Returns an error if the backing data cannot be read. An unknown
    /// package is not an error and yields an empty list.
    fn read_dependencies(&self, package: &PackageId) -> Result<Vec<String>>;

    /// Returns every well-formed record in backing-data order
    ///
    /// # Errors
    /// Returns an error if the backing data cannot be read
    fn scan_records(&self) -> Result<Vec<DependencyRecord>>;

    /// Human-readable location of the backing data, used in diagnostics
    fn describe(&self) -> String;
}

impl<R: RegistryReader + ?Sized> RegistryReader for Box<R> {
    fn read_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        (**self).read_dependencies(package)
    }

    fn scan_records(&self) -> Result<Vec<DependencyRecord>> {
        (**self).scan_records()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
