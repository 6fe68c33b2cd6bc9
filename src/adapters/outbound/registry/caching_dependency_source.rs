use crate::dependency_graph::domain::{DependencyRecord, PackageId};
use crate::ports::outbound::{DependencySource, ProgressReporter, RegistryReader};
use dashmap::DashMap;
use std::cell::RefCell;
use std::collections::HashMap;

/// State of the reverse (who-depends-on-me) index
enum ReverseIndex {
    /// Not built yet; every uncached forward lookup is remembered here
    Collecting(Vec<(String, Vec<String>)>),
    /// Built; answers all reverse queries from now on
    Materialized(HashMap<String, Vec<String>>),
}

/// CachingDependencySource wraps a RegistryReader with memoization and a
/// lazily built reverse index.
///
/// Forward lookups are cached per `name` / `name@version` key for the life
/// of the value, failures included, so the registry is read at most once
/// per distinct query. Registry failures are reported through the
/// ProgressReporter and answered with an empty list.
///
/// The reverse index is built on the first `reverse_dependents` call and
/// then frozen:
/// - if forward lookups already happened, it is built from exactly those
///   lookups, so packages never queried forward are missing from it;
/// - otherwise it is built from a full scan of the registry.
///
/// Results of reverse queries therefore depend on call order.
pub struct CachingDependencySource<R: RegistryReader, P: ProgressReporter> {
    inner: R,
    reporter: P,
    cache: DashMap<String, Vec<String>>,
    reverse_index: RefCell<ReverseIndex>,
}

impl<R: RegistryReader, P: ProgressReporter> CachingDependencySource<R, P> {
    pub fn new(inner: R, reporter: P) -> Self {
        Self {
            inner,
            reporter,
            cache: DashMap::new(),
            reverse_index: RefCell::new(ReverseIndex::Collecting(Vec::new())),
        }
    }

    /// Number of distinct forward queries answered so far
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn is_reverse_index_materialized(&self) -> bool {
        matches!(*self.reverse_index.borrow(), ReverseIndex::Materialized(_))
    }

    pub fn registry(&self) -> &R {
        &self.inner
    }

    fn materialize_reverse_index(&self) {
        let mut state = self.reverse_index.borrow_mut();
        let observed = match &mut *state {
            ReverseIndex::Materialized(_) => return,
            ReverseIndex::Collecting(observed) => std::mem::take(observed),
        };

        let index = if observed.is_empty() {
            tracing::debug!(registry = %self.inner.describe(), "building reverse index from full scan");
            self.scan_reverse_index()
        } else {
            tracing::debug!(
                lookups = observed.len(),
                "building reverse index from forward lookups"
            );
            let mut index: HashMap<String, Vec<String>> = HashMap::new();
            for (package, dependencies) in observed {
                for dependency in dependencies {
                    index.entry(dependency).or_default().push(package.clone());
                }
            }
            index
        };

        *state = ReverseIndex::Materialized(index);
    }

    fn scan_reverse_index(&self) -> HashMap<String, Vec<String>> {
        let records = match self.inner.scan_records() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "registry scan failed");
                self.reporter.report_error(&format!(
                    "⚠️  Warning: Could not scan {} for reverse dependencies: {}",
                    self.inner.describe(),
                    e
                ));
                Vec::new()
            }
        };

        let mut index: HashMap<String, Vec<String>> = HashMap::new();
        for DependencyRecord {
            name, dependencies, ..
        } in records
        {
            for dependency in dependencies {
                index.entry(dependency).or_default().push(name.clone());
            }
        }
        index
    }
}

impl<R: RegistryReader, P: ProgressReporter> DependencySource for CachingDependencySource<R, P> {
    fn dependencies(&self, package: &PackageId) -> Vec<String> {
        let key = package.cache_key();

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(key = %key, "dependency cache hit");
            return cached.value().clone();
        }

        self.reporter
            .report_progress(self.cache.len() + 1, 0, Some(key.as_str()));
        let dependencies = match self.inner.read_dependencies(package) {
            Ok(dependencies) => dependencies,
            Err(e) => {
                tracing::warn!(package = %package, error = %e, "dependency lookup failed");
                self.reporter.report_error(&format!(
                    "⚠️  Warning: Could not read dependencies of '{}' from {}: {}",
                    package,
                    self.inner.describe(),
                    e
                ));
                Vec::new()
            }
        };

        self.cache.insert(key, dependencies.clone());
        if let ReverseIndex::Collecting(observed) = &mut *self.reverse_index.borrow_mut() {
            observed.push((package.name().to_string(), dependencies.clone()));
        }

        dependencies
    }

    fn reverse_dependents(&self, name: &str) -> Vec<String> {
        self.materialize_reverse_index();
        match &*self.reverse_index.borrow() {
            ReverseIndex::Materialized(index) => index.get(name).cloned().unwrap_or_default(),
            ReverseIndex::Collecting(_) => Vec::new(),
        }
    }
}
