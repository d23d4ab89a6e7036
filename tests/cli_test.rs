use std::fs;
use std::process::Output;
use tempfile::TempDir;
use tokio::process::Command as TokioCommand;

/// Runs the binary with debug logging so any handle acquisition shows up on stderr.
async fn run_watchfd(args: &[&str]) -> Output {
    run_watchfd_with_env(args, &[("RUST_LOG", "watchfd=debug")]).await
}

async fn run_watchfd_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    TokioCommand::new(env!("CARGO_BIN_EXE_watchfd"))
        .args(args)
        .env_remove("RUST_LOG")
        .envs(env.iter().copied())
        .output()
        .await
        .expect("Failed to run watchfd")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_no_handles(output: &Output) {
    let err = stderr(output);
    assert!(!err.contains("inotify instance created"), "stderr: {err}");
    assert!(!err.contains("notification backend"), "stderr: {err}");
    assert!(!stdout(output).contains("Watching file for events..."));
}

#[tokio::test]
async fn test_no_arguments_is_usage_error() {
    let output = run_watchfd(&[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("USAGE: watchfd PATH"));
    assert_no_handles(&output);
}

#[tokio::test]
async fn test_usage_error_is_single_stderr_line() {
    for args in [&[][..], &["one", "two"][..], &["--bogus", "x"][..]] {
        let output = run_watchfd_with_env(args, &[]).await;

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stderr(&output), "USAGE: watchfd PATH\n");
    }
}

#[tokio::test]
async fn test_too_many_arguments_is_usage_error() {
    let output = run_watchfd(&["one", "two"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert_no_handles(&output);
}

#[tokio::test]
async fn test_separator_only_path_is_invalid() {
    let output = run_watchfd(&["///"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid file path: ///"));
    assert_no_handles(&output);
}

#[tokio::test]
async fn test_empty_path_is_invalid() {
    let output = run_watchfd(&[""]).await;

    assert_eq!(output.status.code(), Some(2));
    assert_no_handles(&output);
}

#[tokio::test]
async fn test_invalid_path_wins_over_bad_config() {
    let output = run_watchfd(&["--config", "/definitely/not/here.toml", "/"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert_no_handles(&output);
}

#[tokio::test]
async fn test_bad_config_fails_before_handles() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("watchfd.toml");
    fs::write(&config_path, "[watch]\nbuffer_size = 8\n").unwrap();
    let watched = temp_dir.path().join("notes.txt");
    fs::write(&watched, "hello").unwrap();

    let output = run_watchfd(&[
        "--config",
        config_path.to_str().unwrap(),
        watched.to_str().unwrap(),
    ])
    .await;

    assert_ne!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Invalid configuration"));
    assert_no_handles(&output);
}

#[tokio::test]
async fn test_help_exits_successfully() {
    let output = run_watchfd(&["--help"]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("PATH"));
}

#[tokio::test]
async fn test_backend_init_failure_is_fatal_before_watch() {
    let temp_dir = TempDir::new().unwrap();
    let watched = temp_dir.path().join("notes.txt");
    fs::write(&watched, "hello").unwrap();

    let output = run_watchfd_with_env(
        &[watched.to_str().unwrap()],
        &[
            ("RUST_LOG", "watchfd=debug"),
            ("DBUS_SESSION_BUS_ADDRESS", "unix:path=/nonexistent"),
        ],
    )
    .await;

    let err = stderr(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(err.contains("Failed to initialize notification backend"), "stderr: {err}");
    assert!(!err.contains("inotify instance created"), "stderr: {err}");
    assert!(!stdout(&output).contains("Watching file for events..."));
}
