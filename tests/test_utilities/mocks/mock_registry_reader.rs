use depviz::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RegistryReader backed by an ordered record list, counting every access
#[derive(Default, Clone)]
pub struct MockRegistryReader {
    records: Vec<DependencyRecord>,
    pub reads: Arc<Mutex<Vec<String>>>,
    pub scans: Arc<Mutex<usize>>,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockRegistryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record; `spec` is `name` or `name@version`
    pub fn with_package(mut self, spec: &str, dependencies: &[&str]) -> Self {
        let id = PackageId::parse(spec);
        self.records.push(DependencyRecord::new(
            id.name(),
            id.version().map(str::to_string),
            dependencies.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }

    pub fn reads_of(&self, key: &str) -> usize {
        self.reads
            .lock()
            .unwrap()
            .iter()
            .filter(|k| k.as_str() == key)
            .count()
    }

    pub fn scan_count(&self) -> usize {
        *self.scans.lock().unwrap()
    }
}

impl RegistryReader for MockRegistryReader {
    fn read_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        self.reads.lock().unwrap().push(package.cache_key());
        if self.should_fail {
            anyhow::bail!("mock registry unavailable");
        }
        Ok(self
            .records
            .iter()
            .find(|r| package.matches(&r.name, r.version.as_deref()))
            .map(|r| r.dependencies.clone())
            .unwrap_or_default())
    }

    fn scan_records(&self) -> Result<Vec<DependencyRecord>> {
        *self.scans.lock().unwrap() += 1;
        if self.should_fail {
            anyhow::bail!("mock registry unavailable");
        }
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "mock registry".to_string()
    }
}
