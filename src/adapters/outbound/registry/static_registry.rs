use crate::dependency_graph::domain::{DependencyRecord, PackageId};
use crate::ports::outbound::RegistryReader;
use crate::shared::Result;

/// StaticRegistry adapter - an ordered in-memory dependency table
///
/// Lookup follows the same first-match rule as the text file registry.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    records: Vec<DependencyRecord>,
}

impl StaticRegistry {
    /// Appends a record; `spec` is `name` or `name@version`
    pub fn with_package(mut self, spec: &str, dependencies: &[&str]) -> Self {
        let id = PackageId::parse(spec);
        self.records.push(DependencyRecord::new(
            id.name(),
            id.version().map(str::to_string),
            dependencies
                .iter()
                .map(|dep| PackageId::parse(dep).name().to_string())
                .collect(),
        ));
        self
    }

    /// Small crate-like table used for `builtin:` locators; contains one cycle
    pub fn demo() -> Self {
        Self::default()
            .with_package("serde@1.0", &["serde_derive"])
            .with_package("serde_derive@1.0", &["proc-macro2", "quote", "syn"])
            .with_package("serde_json@1.0", &["serde", "itoa", "ryu", "memchr"])
            .with_package("syn@2.0", &["proc-macro2", "quote", "unicode-ident"])
            .with_package("quote@1.0", &["proc-macro2"])
            .with_package("proc-macro2@1.0", &["unicode-ident"])
            .with_package("unicode-ident@1.0", &[])
            .with_package("tokio@1.40", &["bytes", "mio", "pin-project-lite", "tokio-macros"])
            .with_package("tokio-macros@2.4", &["proc-macro2", "quote", "syn"])
            .with_package("mio@1.0", &["libc", "log"])
            .with_package("log@0.4", &["value-bag"])
            .with_package("value-bag@1.9", &["log"])
    }
}

impl RegistryReader for StaticRegistry {
    fn read_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        Ok(self
            .records
            .iter()
            .find(|record| package.matches(&record.name, record.version.as_deref()))
            .map(|record| record.dependencies.clone())
            .unwrap_or_default())
    }

    fn scan_records(&self) -> Result<Vec<DependencyRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "built-in demo registry".to_string()
    }
}
