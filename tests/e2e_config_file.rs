/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn registry_locator() -> String {
    format!("file://{}", fixtures_path().join("registry.txt").display())
}

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_settings() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depviz.config.yml"),
            &format!(
                "package_name: webapp\nrepository_url: {}\nformat: dot\n",
                registry_locator()
            ),
        );

        let output = cargo_bin_cmd!("depviz")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("digraph dependencies {"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_file_requires_arguments() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("depviz")
            .current_dir(dir.path())
            .assert()
            .code(3);
    }

    #[test]
    fn test_unknown_fields_warn_but_run() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depviz.config.yml"),
            &format!(
                "package_name: chain-a\nrepository_url: {}\ncolour: blue\n",
                registry_locator()
            ),
        );

        let output = cargo_bin_cmd!("depviz")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'colour'"));
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            &format!(
                "package_name: webapp\nrepository_url: {}\npackage_version: \"1.0\"\n",
                registry_locator()
            ),
        );

        let output = cargo_bin_cmd!("depviz")
            .args(["--config", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Direct dependencies of webapp@1.0\n  - http-server\n"));
    }

    #[test]
    fn test_fixture_config_file() {
        // repository_url in the fixture is relative to the crate root
        let output = cargo_bin_cmd!("depviz")
            .current_dir(env!("CARGO_MANIFEST_DIR"))
            .args(["-c", "tests/fixtures/depviz.config.yml", "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["configuration"]["package_version"], "2.0");
        assert_eq!(json["configuration"]["max_depth"], 5);
        assert_eq!(json["configuration"]["exclude_substring"], "test");
    }

    #[test]
    fn test_explicit_config_not_found_error() {
        let output = cargo_bin_cmd!("depviz")
            .args(["--config", "/nonexistent/depviz.config.yml"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "package_name: [unclosed\n");

        let output = cargo_bin_cmd!("depviz")
            .args(["--config", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_max_depth_in_config_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            "package_name: webapp\nrepository_url: builtin:\nmax_depth: 0\n",
        );

        let output = cargo_bin_cmd!("depviz")
            .args(["-c", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("max_depth"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod override_tests {
    use super::*;

    #[test]
    fn test_cli_values_override_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &format!(
                "package_name: webapp\nrepository_url: {}\nformat: text\nmax_depth: 1\n",
                registry_locator()
            ),
        );

        let output = cargo_bin_cmd!("depviz")
            .args([
                "-c",
                config_path.to_str().unwrap(),
                "-p",
                "chain-a",
                "-f",
                "json",
                "-d",
                "3",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["configuration"]["package_name"], "chain-a");
        assert_eq!(json["configuration"]["max_depth"], 3);
        assert_eq!(
            json["load_order"],
            serde_json::json!(["chain-a", "chain-b", "chain-c", "chain-d"])
        );
    }

    #[test]
    fn test_cli_exclude_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &format!(
                "package_name: webapp\nrepository_url: {}\nexclude_substring: logging\n",
                registry_locator()
            ),
        );

        let output = cargo_bin_cmd!("depviz")
            .args(["-c", config_path.to_str().unwrap(), "-e", "socket", "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let order: Vec<String> = serde_json::from_value(json["load_order"].clone()).unwrap();
        assert!(order.contains(&"logging".to_string()));
        assert!(!order.contains(&"socket-io".to_string()));
    }
}
