// Rust guideline compliant 2026-10-18

//! Process-level tests for the `commitguard-pre-commit` binary.

use git2::Repository;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = "Packages/manifest.json";
const SETTINGS: &str = "ProjectSettings/ProjectSettings.asset";
const CLEAN_SETTINGS: &str = "PlayerSettings:\n  cloudProjectId: \n";

fn staged_repo(manifest: &str, settings: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = Repository::init(temp_dir.path()).expect("init git repo");
    let mut index = repo.index().expect("open index");
    for (rel, content) in [(MANIFEST, manifest), (SETTINGS, settings)] {
        let full = temp_dir.path().join(rel);
        fs::create_dir_all(full.parent().expect("path has parent")).expect("create dir");
        fs::write(&full, content).expect("write file");
        index.add_path(Path::new(rel)).expect("stage file");
    }
    index.write().expect("write index");
    temp_dir
}

fn run_hook(repo_path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_commitguard-pre-commit"))
        .current_dir(repo_path)
        .env_remove("GIT_INDEX_FILE")
        .env_remove("GIT_DIR")
        .env_remove("COMMITGUARD_MANIFEST_PATH")
        .env_remove("COMMITGUARD_SETTINGS_PATH")
        .env_remove("COMMITGUARD_STRICT_SOURCES")
        .env_remove("COMMITGUARD_LOG_LEVEL")
        .env_remove("COMMITGUARD_LOG_FILE")
        .output()
        .expect("run commitguard-pre-commit")
}

#[test]
fn pre_commit_binary_allows_clean_commit() {
    let temp_dir = staged_repo(
        r#"{"dependencies": {"com.unity.multiplayer.tools": "1.2.3"}}"#,
        CLEAN_SETTINGS,
    );

    let output = run_hook(temp_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "expected no stdout, got {:?}", output.stdout);
}

#[test]
fn pre_commit_binary_rejects_virtual_projects() {
    let temp_dir = staged_repo(
        r#"{"dependencies": {"com.unity.multiplayer.virtualprojects": "1.0.0", "com.unity.multiplayer.tools": "1.2.3"}}"#,
        CLEAN_SETTINGS,
    );

    let output = run_hook(temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Oh no! Bad commit! Virtual projects package should not be committed\n"
    );
}

#[test]
fn pre_commit_binary_rejects_cloud_project_id() {
    let temp_dir = staged_repo(
        r#"{"dependencies": {"com.unity.multiplayer.tools": "1.2.3"}}"#,
        "PlayerSettings:\n  cloudProjectId: ABC123\n",
    );

    let output = run_hook(temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {}", stdout);
    assert!(stdout.starts_with("Oh no! Bad commit! cloudProjectId"));
}

#[test]
fn pre_commit_binary_faults_on_malformed_manifest() {
    let temp_dir = staged_repo("{not json", CLEAN_SETTINGS);

    let output = run_hook(temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "a fault must not print a rejection");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON error"), "stderr: {}", stderr);
}
