use crate::ports::outbound::DependencySource;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Transitive reverse-dependency closure of `package`
///
/// Breadth-first over `reverse_dependents`, starting at `package` with depth
/// 0. A package is expanded while its depth is below `max_depth` (no limit
/// when `None`). Every package is enqueued at most once, so reverse cycles
/// terminate. The starting package is never part of the result.
pub fn reverse_closure<S: DependencySource + ?Sized>(
    source: &S,
    package: &str,
    max_depth: Option<usize>,
) -> BTreeSet<String> {
    let mut seen: HashSet<String> = HashSet::from([package.to_string()]);
    let mut dependents = BTreeSet::new();
    let mut queue = VecDeque::from([(package.to_string(), 0usize)]);

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for dependent in source.reverse_dependents(&current) {
            if seen.insert(dependent.clone()) {
                dependents.insert(dependent.clone());
                queue.push_back((dependent, depth + 1));
            }
        }
    }

    dependents
}
