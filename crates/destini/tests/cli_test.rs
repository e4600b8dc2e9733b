//! Tests for the validate and walk command handlers.

use destini::cli::{ValidationOutputFormat, handle_validate_command, handle_walk_command};
use destini::validator::ValidationConfig;
use destini::{GraphPolicy, stories};
use std::path::Path;

const GOOD: &str = r#"
[story]
name = "door"
start = "door"

[[nodes]]
id = "door"
text = "A door."

[[nodes.options]]
label = "Open it"
target = "room"

[[nodes]]
id = "room"
text = "An empty room."
"#;

const BROKEN: &str = r#"
[story]
name = "door"
start = "door"

[[nodes]]
id = "door"
text = "A door."

[[nodes.options]]
label = "Open it"
target = "hallway"
"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_validate_single_clean_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write(temp_dir.path(), "door.toml", GOOD);

    let mut out = Vec::new();
    let outcome = handle_validate_command(
        path,
        &ValidationConfig::default(),
        ValidationOutputFormat::Human,
        true,
        false,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.total_files, 1);
    assert_eq!(outcome.exit_code(true), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No issues found"));
    assert!(text.contains("All stories valid"));
}

#[test]
fn test_validate_directory_mixed() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "good.toml", GOOD);
    write(temp_dir.path(), "broken.toml", BROKEN);
    write(temp_dir.path(), "bundled.toml", stories::DESTINI_TOML);
    write(temp_dir.path(), "notes.md", "not a story");

    let mut out = Vec::new();
    let outcome = handle_validate_command(
        temp_dir.path().to_path_buf(),
        &ValidationConfig::default(),
        ValidationOutputFormat::Human,
        false,
        false,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.total_files, 3);
    assert_eq!(outcome.clean_files, 1);
    assert!(outcome.has_errors);
    assert!(outcome.has_warnings);
    assert_eq!(outcome.exit_code(false), 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("hallway"));
    assert!(text.contains("Validation Summary"));
}

#[test]
fn test_validate_strict_warnings_exit_code() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write(temp_dir.path(), "destini.toml", stories::DESTINI_TOML);

    let mut out = Vec::new();
    let outcome = handle_validate_command(
        path,
        &ValidationConfig::default(),
        ValidationOutputFormat::Json,
        true,
        false,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.exit_code(true), 2);
    assert_eq!(outcome.exit_code(false), 0);

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 2);
    assert_eq!(json["warnings"][0]["nodes"][0], "pier");
}

#[test]
fn test_validate_missing_path() {
    let mut out = Vec::new();
    let result = handle_validate_command(
        "definitely/not/here".into(),
        &ValidationConfig::default(),
        ValidationOutputFormat::Human,
        false,
        false,
        &mut out,
    );
    assert!(result.is_err());
}

#[test]
fn test_walk_bundled_story() {
    let mut out = Vec::new();
    let summary =
        handle_walk_command(None, GraphPolicy::default(), &[0, 1], false, &mut out).unwrap();

    assert_eq!(summary.final_node.as_str(), "crash");
    assert!(summary.ended);
    assert_eq!(summary.restarts, 0);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("== destini =="));
    assert!(text.contains("-- The End --"));
}

#[test]
fn test_walk_past_ending_fails_without_restart() {
    let mut out = Vec::new();
    let result = handle_walk_command(None, GraphPolicy::default(), &[0, 1, 0], false, &mut out);
    assert!(result.is_err());
}

#[test]
fn test_walk_restarts_at_ending() {
    let mut out = Vec::new();
    let summary =
        handle_walk_command(None, GraphPolicy::default(), &[0, 1, 1, 0], true, &mut out).unwrap();

    assert_eq!(summary.final_node.as_str(), "sing_along");
    assert_eq!(summary.restarts, 1);
    assert!(String::from_utf8(out).unwrap().contains("(restart)"));
}

#[test]
fn test_walk_strict_policy_rejects_bundled_copy() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write(temp_dir.path(), "destini.toml", stories::DESTINI_TOML);

    let mut out = Vec::new();
    let result = handle_walk_command(Some(path), GraphPolicy::strict(), &[], false, &mut out);
    assert!(result.is_err());
}
