use motion_devtools::{check_workspace, CheckConfig, DevToolsError};
use std::path::Path;
use tempfile::TempDir;

fn write_workspace_manifest(root: &Path, version: &str) {
    std::fs::write(
        root.join("Cargo.toml"),
        format!(
            "[workspace]\nmembers = [\"crates/*\"]\n\n[workspace.package]\nversion = \"{version}\"\nedition = \"2021\"\n"
        ),
    )
    .unwrap();
}

fn write_crate_manifest(root: &Path, name: &str, version_line: &str) {
    let crate_dir = root.join("crates").join(name);
    std::fs::create_dir_all(&crate_dir).unwrap();
    std::fs::write(
        crate_dir.join("Cargo.toml"),
        format!("[package]\nname = \"{name}\"\n{version_line}\nedition = \"2021\"\n"),
    )
    .unwrap();
}

fn check_config(root: &Path, crates: &[&str]) -> CheckConfig {
    CheckConfig {
        manifest: root.join("Cargo.toml"),
        crates_root: root.join("crates"),
        crates: crates.iter().map(|s| s.to_string()).collect(),
        verbose: false,
    }
}

#[test]
fn test_matching_literal_version_passes() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "1.2.0");
    write_crate_manifest(temp_dir.path(), "motion-core", "version = \"1.2.0\"");

    let report = check_workspace(&check_config(temp_dir.path(), &["motion-core"])).unwrap();

    assert_eq!(report.workspace_version, "1.2.0");
    assert_eq!(report.checked, 1);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_mismatched_literal_version_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "1.2.0");
    write_crate_manifest(temp_dir.path(), "motion-core", "version = \"1.1.9\"");

    let err = check_workspace(&check_config(temp_dir.path(), &["motion-core"])).unwrap_err();

    match &err {
        DevToolsError::VersionMismatchError {
            crate_name,
            crate_version,
            workspace_version,
        } => {
            assert_eq!(crate_name, "motion-core");
            assert_eq!(crate_version, "1.1.9");
            assert_eq!(workspace_version, "1.2.0");
        }
        other => panic!("expected version mismatch, got {other:?}"),
    }

    // The operator-facing message names the member and both versions.
    let message = err.to_string();
    assert!(message.contains("motion-core"));
    assert!(message.contains("1.1.9"));
    assert!(message.contains("1.2.0"));
}

#[test]
fn test_workspace_inheritance_marker_is_always_consistent() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "3.0.0");
    write_crate_manifest(temp_dir.path(), "motion-dom", "version.workspace = true");

    let report = check_workspace(&check_config(temp_dir.path(), &["motion-dom"])).unwrap();
    assert_eq!(report.checked, 1);
}

#[test]
fn test_missing_manifest_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "1.2.0");
    write_crate_manifest(temp_dir.path(), "motion-core", "version = \"1.2.0\"");
    // motion-scroll is scaffolded but has no manifest yet.

    let report = check_workspace(&check_config(
        temp_dir.path(),
        &["motion-core", "motion-scroll"],
    ))
    .unwrap();

    assert_eq!(report.checked, 1);
    assert_eq!(report.skipped, vec!["motion-scroll".to_string()]);
}

#[test]
fn test_first_mismatch_aborts_before_later_members() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "1.2.0");
    write_crate_manifest(temp_dir.path(), "motion-core", "version = \"0.1.0\"");
    // A later member whose manifest would not even parse; fail-fast means the
    // run never reaches it.
    let broken_dir = temp_dir.path().join("crates").join("motion-macros");
    std::fs::create_dir_all(&broken_dir).unwrap();
    std::fs::write(broken_dir.join("Cargo.toml"), "[package").unwrap();

    let err = check_workspace(&check_config(
        temp_dir.path(),
        &["motion-core", "motion-macros"],
    ))
    .unwrap_err();

    assert!(matches!(err, DevToolsError::VersionMismatchError { .. }));
}

#[test]
fn test_missing_workspace_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    let err = check_workspace(&check_config(temp_dir.path(), &["motion-core"])).unwrap_err();
    assert!(matches!(err, DevToolsError::IoError(_)));
}

#[test]
fn test_malformed_member_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "1.2.0");

    let crate_dir = temp_dir.path().join("crates").join("motion-core");
    std::fs::create_dir_all(&crate_dir).unwrap();
    std::fs::write(crate_dir.join("Cargo.toml"), "version = ???").unwrap();

    let err = check_workspace(&check_config(temp_dir.path(), &["motion-core"])).unwrap_err();
    assert!(matches!(err, DevToolsError::TomlError(_)));
}

#[test]
fn test_check_is_idempotent_on_unchanged_manifests() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_manifest(temp_dir.path(), "1.2.0");
    write_crate_manifest(temp_dir.path(), "motion-core", "version = \"1.2.0\"");
    write_crate_manifest(temp_dir.path(), "motion-dom", "version.workspace = true");

    let config = check_config(temp_dir.path(), &["motion-core", "motion-dom", "motion-layout"]);

    let first = check_workspace(&config).unwrap();
    let second = check_workspace(&config).unwrap();

    assert_eq!(first.workspace_version, second.workspace_version);
    assert_eq!(first.checked, second.checked);
    assert_eq!(first.skipped, second.skipped);
}
