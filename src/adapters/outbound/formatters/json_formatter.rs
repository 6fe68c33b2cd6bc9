use crate::application::dto::GraphResponse;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    configuration: Configuration<'a>,
    direct_dependencies: &'a [String],
    edges: Vec<Edge<'a>>,
    cycles: Vec<&'a [String]>,
    load_order: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse_dependents: Option<Vec<&'a str>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Configuration<'a> {
    package_name: &'a str,
    repository_url: &'a str,
    package_version: Option<&'a str>,
    max_depth: Option<usize>,
    exclude_substring: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse_depth: Option<usize>,
}

#[derive(Debug, Serialize)]
struct Edge<'a> {
    package: &'a str,
    dependencies: &'a [String],
}

/// JsonFormatter adapter serializing the full response with serde_json
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, response: &GraphResponse) -> Result<String> {
        let request = &response.request;
        let report = Report {
            metadata: Metadata {
                timestamp: response.metadata.timestamp(),
                tool: Tool {
                    name: response.metadata.tool_name(),
                    version: response.metadata.tool_version(),
                },
            },
            configuration: Configuration {
                package_name: request.package.name(),
                repository_url: &request.repository,
                package_version: request.package.version(),
                max_depth: request.policy.max_depth(),
                exclude_substring: request.policy.exclude_substring(),
                reverse_depth: request.reverse_depth,
            },
            direct_dependencies: &response.direct_dependencies,
            edges: response
                .graph
                .edges()
                .map(|(package, dependencies)| Edge {
                    package,
                    dependencies,
                })
                .collect(),
            cycles: response.graph.cycles().iter().map(|c| c.packages()).collect(),
            load_order: response.graph.load_order(),
            reverse_dependents: response
                .reverse_dependents
                .as_ref()
                .map(|set| set.iter().map(String::as_str).collect()),
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}
