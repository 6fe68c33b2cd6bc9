use super::TraversalPolicy;
use crate::dependency_graph::domain::{Cycle, DependencyGraph, PackageId};
use crate::ports::outbound::DependencySource;
use std::collections::{HashMap, HashSet};

/// Work items of the explicit traversal stack
enum Step {
    /// Try to expand `package`, reached `depth` hops from the root
    Enter { package: String, depth: usize },
    /// All children of the innermost path entry are done
    Leave,
}

/// GraphBuilder service - depth-first pre-order expansion of a root package
///
/// Uses an explicit stack instead of recursion so malformed or hostile
/// registry data cannot exhaust the call stack. Per package, in order:
///
/// 1. beyond the depth ceiling: skip
/// 2. already on the current root-to-here path: record a cycle, skip
/// 3. name contains the exclusion substring: skip
/// 4. already visited through another branch: skip
/// 5. otherwise mark visited, append to the load order, record one edge per
///    dependency, then descend into the dependencies in declared order
///
/// Only the root lookup is pinned to a version.
pub struct GraphBuilder<S> {
    source: S,
    graph: DependencyGraph,
    visited: HashSet<String>,
}

impl<S: DependencySource> GraphBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            graph: DependencyGraph::new(),
            visited: HashSet::new(),
        }
    }

    /// Expands `root` into the builder's graph and returns it
    ///
    /// State accumulates across calls; call [`GraphBuilder::reset`] first to
    /// start from scratch.
    pub fn expand(&mut self, root: &PackageId, policy: &TraversalPolicy) -> &DependencyGraph {
        let mut path: Vec<String> = Vec::new();
        let mut path_positions: HashMap<String, usize> = HashMap::new();
        let mut stack = vec![Step::Enter {
            package: root.name().to_string(),
            depth: 0,
        }];

        while let Some(step) = stack.pop() {
            let (package, depth) = match step {
                Step::Leave => {
                    if let Some(finished) = path.pop() {
                        path_positions.remove(&finished);
                    }
                    continue;
                }
                Step::Enter { package, depth } => (package, depth),
            };

            if !policy.allows_depth(depth) {
                continue;
            }

            if let Some(&start) = path_positions.get(&package) {
                let mut segment = path[start..].to_vec();
                segment.push(package);
                tracing::debug!(cycle = %segment.join(" -> "), "dependency cycle detected");
                self.graph.record_cycle(Cycle::new(segment));
                continue;
            }

            if policy.excludes(&package) {
                tracing::debug!(package = %package, "excluded by substring");
                continue;
            }

            if !self.visited.insert(package.clone()) {
                continue;
            }

            let lookup = if depth == 0 {
                root.clone()
            } else {
                PackageId::new(package.as_str())
            };
            let dependencies = self.source.dependencies(&lookup);
            tracing::debug!(
                package = %package,
                depth,
                dependencies = dependencies.len(),
                "expanding"
            );

            self.graph.record_visit(&package);
            self.graph.add_edges(&package, &dependencies);

            path_positions.insert(package.clone(), path.len());
            path.push(package);
            stack.push(Step::Leave);
            stack.extend(dependencies.into_iter().rev().map(|dependency| Step::Enter {
                package: dependency,
                depth: depth + 1,
            }));
        }

        &self.graph
    }

    /// Clears graph, visited set, cycles and load order.
    ///
    /// The dependency source (and any cache it holds) is left untouched.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.visited.clear();
    }

    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }
}
