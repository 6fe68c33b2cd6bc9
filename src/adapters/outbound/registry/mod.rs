/// Registry adapters: backing data for dependency lookups
mod caching_dependency_source;
mod locator;
mod static_registry;
mod text_file_registry;

pub use caching_dependency_source::CachingDependencySource;
pub use locator::{open_registry, RegistryLocator};
pub use static_registry::StaticRegistry;
pub use text_file_registry::{parse_record, TextFileRegistry};
