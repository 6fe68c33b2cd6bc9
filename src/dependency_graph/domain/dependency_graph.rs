use std::collections::HashMap;

/// A path segment that leads from a package back to itself.
///
/// Starts at the first repeated package and ends by repeating it,
/// e.g. `["a", "b", "a"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle(Vec<String>);

impl Cycle {
    pub fn new(packages: Vec<String>) -> Self {
        Self(packages)
    }

    pub fn packages(&self) -> &[String] {
        &self.0
    }

    /// Consecutive `(from, to)` pairs along the cycle
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// DependencyGraph aggregate produced by one traversal
///
/// Every expanded package is a key of the adjacency, leaves included (with an
/// empty dependency list). Keys keep the order in which packages were
/// expanded, which is also the load order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    adjacency: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
    cycles: Vec<Cycle>,
    load_order: Vec<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `package` as visited: appends it to the load order and
    /// registers an (initially empty) adjacency entry.
    pub fn record_visit(&mut self, package: &str) {
        self.load_order.push(package.to_string());
        self.entry(package);
    }

    /// Appends `package -> dependency` edges in the order given
    pub fn add_edges(&mut self, package: &str, dependencies: &[String]) {
        let index = self.entry(package);
        self.adjacency[index]
            .1
            .extend(dependencies.iter().cloned());
    }

    pub fn record_cycle(&mut self, cycle: Cycle) {
        self.cycles.push(cycle);
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.positions.clear();
        self.cycles.clear();
        self.load_order.clear();
    }

    fn entry(&mut self, package: &str) -> usize {
        if let Some(&index) = self.positions.get(package) {
            return index;
        }
        let index = self.adjacency.len();
        self.adjacency.push((package.to_string(), Vec::new()));
        self.positions.insert(package.to_string(), index);
        index
    }

    /// Read-only view of `package -> dependencies`, in expansion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(package, deps)| (package.as_str(), deps.as_slice()))
    }

    /// Every `(from, to)` edge, flattened, in graph-iteration order
    pub fn edge_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges()
            .flat_map(|(package, deps)| deps.iter().map(move |dep| (package, dep.as_str())))
    }

    pub fn dependencies_of(&self, package: &str) -> Option<&[String]> {
        self.positions
            .get(package)
            .map(|&index| self.adjacency[index].1.as_slice())
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.dependencies_of(from)
            .is_some_and(|deps| deps.iter().any(|dep| dep == to))
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn load_order(&self) -> &[String] {
        &self.load_order
    }

    pub fn package_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|(_, deps)| deps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
