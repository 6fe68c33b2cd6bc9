use crate::application::dto::GraphResponse;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Placeholder for unset optional settings
const NOT_SET: &str = "(none)";

/// TextFormatter adapter producing the human-readable report
///
/// Sections, in order: configuration echo, direct dependencies, edges,
/// cycles, load order and (when requested) reverse dependents.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, response: &GraphResponse) -> Result<String> {
        let mut out = String::new();
        self.render_configuration(&mut out, response)?;
        self.render_direct_dependencies(&mut out, response)?;
        self.render_edges(&mut out, response)?;
        self.render_cycles(&mut out, response)?;
        self.render_load_order(&mut out, response)?;
        self.render_reverse_dependents(&mut out, response)?;
        Ok(out)
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_configuration(&self, out: &mut String, response: &GraphResponse) -> Result<()> {
        let request = &response.request;
        let policy = &request.policy;

        writeln!(out, "Configuration")?;
        writeln!(out, "  package_name:      {}", request.package.name())?;
        writeln!(out, "  repository_url:    {}", request.repository)?;
        writeln!(
            out,
            "  package_version:   {}",
            request.package.version().unwrap_or(NOT_SET)
        )?;
        writeln!(
            out,
            "  max_depth:         {}",
            policy
                .max_depth()
                .map_or_else(|| "unbounded".to_string(), |d| d.to_string())
        )?;
        writeln!(
            out,
            "  exclude_substring: {}",
            policy.exclude_substring().unwrap_or(NOT_SET)
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn render_direct_dependencies(&self, out: &mut String, response: &GraphResponse) -> Result<()> {
        writeln!(out, "Direct dependencies of {}", response.request.package)?;
        if response.direct_dependencies.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for dependency in &response.direct_dependencies {
            writeln!(out, "  - {}", dependency)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn render_edges(&self, out: &mut String, response: &GraphResponse) -> Result<()> {
        let graph = &response.graph;
        writeln!(
            out,
            "Dependency graph ({} packages, {} edges)",
            graph.package_count(),
            graph.edge_count()
        )?;
        for (package, dependencies) in graph.edges() {
            if dependencies.is_empty() {
                writeln!(out, "  {}", package)?;
            } else {
                writeln!(out, "  {} -> {}", package, dependencies.join(", "))?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn render_cycles(&self, out: &mut String, response: &GraphResponse) -> Result<()> {
        let cycles = response.graph.cycles();
        if cycles.is_empty() {
            writeln!(out, "Cycles: none")?;
        } else {
            writeln!(out, "Cycles ({})", cycles.len())?;
            for cycle in cycles {
                writeln!(out, "  {}", cycle)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn render_load_order(&self, out: &mut String, response: &GraphResponse) -> Result<()> {
        writeln!(out, "Load order")?;
        for (index, package) in response.graph.load_order().iter().enumerate() {
            writeln!(out, "  {:>3}. {}", index + 1, package)?;
        }
        Ok(())
    }

    fn render_reverse_dependents(&self, out: &mut String, response: &GraphResponse) -> Result<()> {
        let Some(dependents) = &response.reverse_dependents else {
            return Ok(());
        };

        writeln!(out)?;
        let bound = response
            .request
            .reverse_depth
            .map_or_else(String::new, |d| format!(" (depth <= {})", d));
        writeln!(
            out,
            "Packages depending on {}{}",
            response.request.package.name(),
            bound
        )?;
        if dependents.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for dependent in dependents {
            writeln!(out, "  - {}", dependent)?;
        }
        Ok(())
    }
}
