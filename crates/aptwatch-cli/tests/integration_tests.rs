//! Integration tests for CLI commands

use std::io::Write;
use std::process::Command;

/// Helper to run aptwatch command
fn aptwatch(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_aptwatch"))
        .args(args)
        .output()
        .expect("Failed to execute aptwatch")
}

/// Write a config file into `dir` and return its path.
fn write_config(dir: &std::path::Path, contents: &str) -> String {
    let path = dir.join("aptwatch.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path.to_string_lossy().into_owned()
}

mod repos_command {
    use super::*;

    #[test]
    fn test_repos_lists_configured_repositories() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "webhookUrl: https://hooks.example.org/incoming/abc\n\
             repositories:\n\
             \x20 - url: https://apt.example.org/debian\n\
             \x20   distribution: bookworm\n\
             \x20   architecture: amd64\n",
        );

        let output = aptwatch(&["repos", "--config", &config]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("https://apt.example.org/debian"));
        assert!(stdout.contains("bookworm"));
        assert!(stdout.contains("main"));
    }

    #[test]
    fn test_repos_with_empty_watch_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "webhookUrl: https://hooks.example.org/incoming/abc\n",
        );

        let output = aptwatch(&["repos", "--config", &config]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("No repositories configured"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn test_check_json_output_with_empty_watch_list() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let config = write_config(
            dir.path(),
            &format!(
                "webhookUrl: https://hooks.example.org/incoming/abc\n\
                 cacheDir: {}\n",
                cache_dir.display()
            ),
        );

        let output = aptwatch(&["check", "--no-notify", "--json", "--config", &config]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let parsed: serde_json::Value =
            serde_json::from_str(&stdout).expect("Output should be valid JSON");
        assert_eq!(parsed, serde_json::json!([]));
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_missing_config_file_exits_1() {
        let output = aptwatch(&["repos", "--config", "/nonexistent/aptwatch.yaml"]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_incomplete_repository_definition_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "webhookUrl: https://hooks.example.org/incoming/abc\n\
             repositories:\n\
             \x20 - url: https://apt.example.org/debian\n\
             \x20   architecture: amd64\n",
        );

        let output = aptwatch(&["check", "--no-notify", "--config", &config]);

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("distribution"));
    }

    #[test]
    fn test_failed_check_cycle_exits_2() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let config = write_config(
            dir.path(),
            &format!(
                "webhookUrl: https://hooks.example.org/incoming/abc\n\
                 cacheDir: {}\n\
                 repositories:\n\
                 \x20 - url: http://127.0.0.1:1\n\
                 \x20   distribution: bookworm\n\
                 \x20   architecture: amd64\n",
                cache_dir.display()
            ),
        );

        let output = aptwatch(&["check", "--no-notify", "--config", &config]);

        assert_eq!(output.status.code(), Some(2));
    }
}
