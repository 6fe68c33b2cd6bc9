use clap::Parser;
use std::path::PathBuf;

use depviz::application::dto::OutputFormat;
use depviz::config::Overrides;

/// Resolve and visualize the dependency graph of a package
#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(version)]
#[command(about = "Resolve and visualize the dependency graph of a package", long_about = None)]
pub struct Args {
    /// Config file path (defaults to ./depviz.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root package, optionally with a version: NAME or NAME@VERSION
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Dependency data: file://PATH, a bare path, or builtin: for the demo table
    #[arg(short, long, value_name = "LOCATOR")]
    pub repository: Option<String>,

    /// Pin the root lookup to this version
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Maximum traversal depth (root = 0); unbounded when omitted
    #[arg(short = 'd', long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Skip packages whose name contains this substring
    #[arg(short, long = "exclude", value_name = "SUBSTRING")]
    pub exclude: Option<String>,

    /// Output format: text, json or dot
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also render the graph to an image (png, svg or pdf by extension)
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Graphviz-compatible command used for --image
    #[arg(long, value_name = "COMMAND")]
    pub renderer: Option<String>,

    /// List the packages that transitively depend on the root
    #[arg(long)]
    pub reverse: bool,

    /// Depth bound for --reverse; unbounded when omitted
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub reverse_depth: Option<i64>,

    /// Exit with code 1 when dependency cycles are found
    #[arg(long)]
    pub fail_on_cycles: bool,
}

impl Args {
    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            package_name: self.package.clone(),
            repository_url: self.repository.clone(),
            package_version: self.package_version.clone(),
            max_depth: self.max_depth,
            exclude_substring: self.exclude.clone(),
            format: self.format,
            renderer: self.renderer.clone(),
            image: self.image.clone(),
            reverse: self.reverse,
            reverse_depth: self.reverse_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_arguments() {
        let args = Args::try_parse_from(["depviz", "-p", "serde", "-r", "builtin:"]).unwrap();
        assert_eq!(args.package.as_deref(), Some("serde"));
        assert_eq!(args.repository.as_deref(), Some("builtin:"));
        assert!(args.format.is_none());
        assert!(!args.reverse);
        assert!(!args.fail_on_cycles);
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::try_parse_from([
            "depviz",
            "--config",
            "custom.yml",
            "--package",
            "tokio",
            "--repository",
            "file://deps.txt",
            "--package-version",
            "1.40",
            "--max-depth",
            "3",
            "--exclude",
            "macros",
            "--format",
            "DOT",
            "--output",
            "graph.dot",
            "--image",
            "graph.svg",
            "--renderer",
            "neato",
            "--reverse",
            "--reverse-depth",
            "2",
            "--fail-on-cycles",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(overrides.package_version.as_deref(), Some("1.40"));
        assert_eq!(overrides.max_depth, Some(3));
        assert_eq!(overrides.exclude_substring.as_deref(), Some("macros"));
        assert_eq!(overrides.format, Some(OutputFormat::Dot));
        assert_eq!(args.output, Some(PathBuf::from("graph.dot")));
        assert_eq!(overrides.image, Some(PathBuf::from("graph.svg")));
        assert_eq!(overrides.renderer.as_deref(), Some("neato"));
        assert!(overrides.reverse);
        assert_eq!(overrides.reverse_depth, Some(2));
        assert!(args.fail_on_cycles);
    }

    #[test]
    fn test_negative_depth_reaches_validation() {
        let args = Args::try_parse_from(["depviz", "-d", "-1"]).unwrap();
        assert_eq!(args.max_depth, Some(-1));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["depviz", "-f", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_depth_is_rejected() {
        assert!(Args::try_parse_from(["depviz", "--max-depth", "deep"]).is_err());
    }
}
