use crate::shared::Result;

/// Maximum length of the exclusion substring
const MAX_EXCLUDE_LENGTH: usize = 255;

/// TraversalPolicy - depth ceiling and name exclusion applied while expanding
///
/// Depth is counted in hops from the root (root = 0). A package whose depth
/// is within the ceiling is expanded, so with `max_depth = 2` the chain
/// `a -> b -> c -> d` expands `a`, `b` and `c`, and `d` only shows up as
/// the target of `c`'s edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalPolicy {
    max_depth: Option<usize>,
    exclude_substring: Option<String>,
}

impl TraversalPolicy {
    /// Creates a policy; an empty exclusion string disables exclusion
    ///
    /// # Errors
    /// Returns an error if the exclusion string is unreasonably long
    pub fn new(max_depth: Option<usize>, exclude_substring: Option<String>) -> Result<Self> {
        let exclude_substring = exclude_substring.filter(|s| !s.is_empty());
        if let Some(ref substring) = exclude_substring {
            if substring.len() > MAX_EXCLUDE_LENGTH {
                anyhow::bail!(
                    "Exclude substring is too long ({} bytes). Maximum allowed: {} bytes",
                    substring.len(),
                    MAX_EXCLUDE_LENGTH
                );
            }
        }

        Ok(Self {
            max_depth,
            exclude_substring,
        })
    }

    /// A policy with no depth ceiling and no exclusion
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn exclude_substring(&self) -> Option<&str> {
        self.exclude_substring.as_deref()
    }

    /// Whether a package reached at `depth` may still be expanded
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }

    /// Whether `name` contains the exclusion substring
    pub fn excludes(&self, name: &str) -> bool {
        self.exclude_substring
            .as_deref()
            .is_some_and(|substring| name.contains(substring))
    }
}
