/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// `app` requires `lib`, `tool` build-depends on `lib`, `checker` test-depends on it.
const INDEX_TOML: &str = r#"
[[package]]
name = "lib"
installed = true

[[package]]
name = "app"
installed = true
dependencies = ["lib"]

[[package]]
name = "tool"
installed = false
dependencies = [{ name = "lib", kind = "build" }]

[[package]]
name = "checker"
installed = true
dependencies = [{ name = "lib", kind = "test" }]
"#;

fn write_index(path: &Path) {
    fs::write(path, INDEX_TOML).unwrap();
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn pkg_uses(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pkg-uses");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Auto-discovery
// ============================================================================

mod auto_discovery {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_include_build() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(&dir.path().join("pkg-uses.config.yml"), "include_build: true\n");

        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .success()
            .stdout("app\ntool\n")
            .stderr(predicate::str::contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_registry() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("index")).unwrap();
        write_index(&dir.path().join("index").join("universe.toml"));
        write_config(
            &dir.path().join("pkg-uses.config.yml"),
            "registry: index/universe.toml\n",
        );

        pkg_uses(&dir).arg("lib").assert().success().stdout("app\n");
    }

    #[test]
    fn test_auto_discovery_applies_installed() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(
            &dir.path().join("pkg-uses.config.yml"),
            "installed: true\ninclude_build: true\ninclude_test: true\n",
        );

        // tool is not installed
        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .success()
            .stdout("app\nchecker\n");
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));

        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .success()
            .stdout("app\n")
            .stderr(predicate::str::contains("Auto-discovered").not());
    }
}

// ============================================================================
// Explicit config and merging
// ============================================================================

mod explicit_config {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "include_test: true\n");

        pkg_uses(&dir)
            .args(["--config", config_path.to_str().unwrap(), "lib"])
            .assert()
            .success()
            .stdout("app\nchecker\n");
    }

    #[test]
    fn test_explicit_config_skips_auto_discovery() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(&dir.path().join("pkg-uses.config.yml"), "include_build: true\n");
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "include_test: true\n");

        pkg_uses(&dir)
            .args(["-c", config_path.to_str().unwrap(), "lib"])
            .assert()
            .success()
            .stdout("app\nchecker\n");
    }

    #[test]
    fn test_cli_switch_and_config_merged() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(&dir.path().join("pkg-uses.config.yml"), "include_test: true\n");

        pkg_uses(&dir)
            .args(["--include-build", "lib"])
            .assert()
            .success()
            .stdout("app\nchecker\ntool\n");
    }

    #[test]
    fn test_cli_registry_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("real.toml"));
        write_config(
            &dir.path().join("pkg-uses.config.yml"),
            "registry: does-not-exist.toml\n",
        );

        pkg_uses(&dir)
            .args(["--registry", "real.toml", "lib"])
            .assert()
            .success()
            .stdout("app\n");
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(
            &dir.path().join("pkg-uses.config.yml"),
            "include_build: false\ncolumns: 3\n",
        );

        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .success()
            .stdout("app\n")
            .stderr(predicate::str::contains(
                "Unknown config field 'columns' will be ignored",
            ));
    }
}

// ============================================================================
// Error cases
// ============================================================================

mod error_cases {
    use super::*;

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(
            &dir.path().join("pkg-uses.config.yml"),
            "include_build: [[[broken",
        );

        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_config_not_found_error() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));

        pkg_uses(&dir)
            .args(["--config", "missing.yml", "lib"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_config_registry_not_found_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("pkg-uses.config.yml"),
            "registry: nowhere.toml\n",
        );

        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Package index not found"));
    }

    #[test]
    fn test_empty_registry_validation_error() {
        let dir = TempDir::new().unwrap();
        write_index(&dir.path().join("packages.toml"));
        write_config(&dir.path().join("pkg-uses.config.yml"), "registry: \"\"\n");

        pkg_uses(&dir)
            .arg("lib")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("registry must not be empty"));
    }
}
