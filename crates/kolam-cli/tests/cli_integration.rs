//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! Commands that reach the backend run against a wiremock server.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command isolated from the caller's KOLAM_* environment
fn cli_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kolam").expect("Failed to find kolam binary");
    cmd.env_remove("KOLAM_API_URL")
        .env_remove("KOLAM_POLL_INTERVAL_SECS")
        .env_remove("KOLAM_POLL_MAX_ATTEMPTS")
        .env_remove("RUST_LOG");
    cmd
}

/// CLI command pointed at a mock backend
fn cli_against(server: &MockServer) -> Command {
    let mut cmd = cli_cmd();
    cmd.arg("--api-url").arg(server.uri());
    cmd
}

/// Run a blocking assert_cmd invocation without stalling the mock server
async fn run(cmd: Command) -> assert_cmd::assert::Assert {
    let mut cmd = cmd;
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .expect("command thread panicked")
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Argument Handling Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("download"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_upload_rejects_non_image() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.txt", b"just some text");

    cli_cmd()
        .args(["--api-url", "http://127.0.0.1:9"])
        .arg("upload")
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));
}

#[test]
fn test_upload_missing_file() {
    cli_cmd()
        .args(["upload", "/definitely/not/here.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_fetch_rejects_unknown_field() {
    cli_cmd()
        .args(["fetch", "abc123", "colours"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid field"));
}

#[test]
fn test_unsupported_api_scheme() {
    cli_cmd()
        .args(["--api-url", "ftp://example.com", "status", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported URL scheme 'ftp'"));
}

#[test]
fn test_zero_poll_interval_rejected() {
    cli_cmd()
        .args(["--poll-interval", "0", "status", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll interval must be greater than zero"));
}

#[test]
fn test_zero_max_attempts_rejected() {
    cli_cmd()
        .args(["--max-attempts", "0", "status", "abc123"])
        .assert()
        .failure();
}

// ============================================================================
// Demo Command Tests
// ============================================================================

#[test]
fn test_demo_runs_full_lifecycle() {
    cli_cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running demo analysis"))
        .stdout(predicate::str::contains("Status checks: 3"))
        .stdout(predicate::str::contains("Pulli Kolam"))
        .stdout(predicate::str::contains("(embedded image/png"))
        .stdout(predicate::str::contains("Parametric Equations:"));
}

#[test]
fn test_demo_download_writes_png() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("demo")
        .arg("--download")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis image saved to"));

    let saved: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("kolam-analysis-demo-"));
    assert!(saved[0].ends_with(".png"));
}

#[test]
fn test_demo_download_creates_directory() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("saved").join("kolams");

    cli_cmd()
        .arg("demo")
        .arg("--download")
        .arg(&out)
        .assert()
        .success();

    assert!(out.is_dir());
    let saved: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("kolam-analysis-demo-"));
}

// ============================================================================
// Backend Command Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_status_command() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analysis-status/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "completed" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_against(&server);
    cmd.args(["status", "abc123"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("completed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analysis-status/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut cmd = cli_against(&server);
    cmd.args(["status", "missing"]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Status check failed: Not Found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_upload_prints_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-kolam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysisId": "k-42",
            "message": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let image = write_file(&dir, "pulli.png", b"pretend-png");

    let mut cmd = cli_against(&server);
    cmd.arg("upload").arg(&image);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("ID: k-42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_results_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analysis/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "culturalDescription": "A sikku kolam",
            "desmosUrl": "https://www.desmos.com/calculator/abc"
        })))
        .mount(&server)
        .await;

    let mut cmd = cli_against(&server);
    cmd.args(["results", "abc123", "--json"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("\"culturalDescription\": \"A sikku kolam\""))
        .stdout(predicate::str::contains("desmosUrl"))
        .stdout(predicate::str::contains("mathematicalAnalysis").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_merges_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cultural-description/abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "culturalDescription": "Pongal kolam" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parametric-equations/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "equations": "r(θ) = 4 + 2cos(8θ)",
            "desmosUrl": "https://www.desmos.com/calculator/xyz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_against(&server);
    cmd.args(["fetch", "abc123", "cultural", "equations"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Pongal kolam"))
        .stdout(predicate::str::contains("r(θ) = 4 + 2cos(8θ)"))
        .stdout(predicate::str::contains("https://www.desmos.com/calculator/xyz"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_and_download() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-kolam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysisId": "k-7",
            "message": ""
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analysis-status/k-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "completed" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analysis/k-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mathematicalAnalysis": "D8 symmetry"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/download-analysis/k-7"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png-bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let image = write_file(&dir, "pulli.png", b"pretend-png");
    let out = TempDir::new().unwrap();

    let mut cmd = cli_against(&server);
    cmd.args(["--poll-interval", "1", "analyze"])
        .arg(&image)
        .arg("--download")
        .arg(out.path());
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Analysis k-7 complete."))
        .stdout(predicate::str::contains("D8 symmetry"));

    let saved = out.path().join("kolam-analysis-k-7.png");
    assert_eq!(std::fs::read(saved).unwrap(), b"png-bytes");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_reports_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-kolam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysisId": "k-9"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analysis-status/k-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "failed" })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let image = write_file(&dir, "pulli.png", b"pretend-png");

    let mut cmd = cli_against(&server);
    cmd.arg("analyze").arg(&image);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Analysis failed on server"));
}
