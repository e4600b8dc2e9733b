//! Tests for story validation reports.

use destini_narrative::StoryFormat;
use destini_narrative::validator::{
    ValidationConfig, ValidationIssueKind, ValidationWarningKind, validate_story_file,
    validate_story_str,
};

fn validate(toml: &str) -> destini_narrative::validator::ValidationReport {
    validate_story_str(toml, StoryFormat::Toml, &ValidationConfig::default())
}

#[test]
fn test_valid_story() {
    let toml = r#"
        [story]
        name = "test"
        start = "a"

        [[nodes]]
        id = "a"
        text = "Hello"

        [[nodes.options]]
        label = "Bye"
        target = "b"

        [[nodes]]
        id = "b"
        text = "Goodbye"
    "#;

    let result = validate(toml);
    assert!(
        result.is_valid(),
        "Expected valid story, got errors: {:?}",
        result.errors
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn test_syntax_error() {
    let result = validate("[story\nname = ");
    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationIssueKind::InvalidSyntax);
    assert!(result.errors[0].suggestion.is_some());
}

#[test]
fn test_empty_story() {
    let toml = r#"
        [story]
        name = "test"
        start = "a"
    "#;

    let result = validate(toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationIssueKind::EmptyStory);
}

#[test]
fn test_all_structural_errors_reported() {
    let toml = r#"
        [story]
        name = "test"
        start = "nope"

        [[nodes]]
        id = "a"
        text = "One"

        [[nodes.options]]
        label = "Go"
        target = "ghost"

        [[nodes.options]]
        label = "Also go"
        target = "phantom"

        [[nodes]]
        id = "a"
        text = "Two"

        [[nodes]]
        id = "a"
        text = "Three"
    "#;

    let result = validate(toml);
    let kinds: Vec<_> = result.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValidationIssueKind::DuplicateNode,
            ValidationIssueKind::MissingStart,
            ValidationIssueKind::DanglingTarget,
            ValidationIssueKind::DanglingTarget,
        ]
    );
    assert!(result.errors[2].message.contains("ghost"));
    assert!(result.errors[3].message.contains("phantom"));
    assert!(result.format_errors().contains("Suggestion"));
}

#[test]
fn test_analysis_warnings() {
    let toml = r#"
        [story]
        name = "test"
        start = "a"

        [[nodes]]
        id = "a"
        text = "Start"

        [[nodes.options]]
        label = "Left"
        target = "end1"

        [[nodes.options]]
        label = " "
        target = "loop"

        [[nodes]]
        id = "loop"
        text = "Spinning"

        [[nodes.options]]
        label = "Spin"
        target = "loop"

        [[nodes]]
        id = "end1"
        text = "The end."

        [[nodes]]
        id = "end2"
        text = "The end."
    "#;

    let result = validate(toml);
    assert!(result.is_valid(), "Unexpected errors: {:?}", result.errors);

    let kinds: Vec<_> = result.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValidationWarningKind::EmptyLabel,
            ValidationWarningKind::UnreachableNode,
            ValidationWarningKind::DuplicateEnding,
            ValidationWarningKind::NoEnding,
        ]
    );
    assert_eq!(result.warnings[1].nodes[0].as_str(), "end2");
    assert_eq!(result.warnings[3].nodes.len(), 1);
    assert!(result.format_warnings().contains("Warning 4"));
}

#[test]
fn test_strict_config_rejects_unreachable() {
    let toml = r#"
        [story]
        name = "test"
        start = "a"

        [[nodes]]
        id = "a"
        text = "Start"

        [[nodes]]
        id = "orphan"
        text = "Alone"
    "#;

    let config = ValidationConfig {
        allow_unreachable: false,
        ..Default::default()
    };
    let result = validate_story_str(toml, StoryFormat::Toml, &config);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].kind, ValidationIssueKind::UnreachableNode);
}

#[test]
fn test_warnings_can_be_disabled() {
    let toml = r#"
        [story]
        name = "test"
        start = "a"

        [[nodes]]
        id = "a"
        text = "Start"

        [[nodes]]
        id = "b"
        text = "Start"
    "#;

    let config = ValidationConfig {
        warn_unreachable: false,
        warn_duplicate_endings: false,
        ..Default::default()
    };
    let result = validate_story_str(toml, StoryFormat::Toml, &config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_file_errors() {
    let result = validate_story_file("missing/story.toml");
    assert_eq!(result.errors[0].kind, ValidationIssueKind::FileNotFound);

    let result = validate_story_file("story.txt");
    assert_eq!(result.errors[0].kind, ValidationIssueKind::UnsupportedFormat);
}

#[test]
fn test_bundled_story_warnings() {
    let result = validate_story_str(
        destini_narrative::stories::DESTINI_TOML,
        StoryFormat::Toml,
        &ValidationConfig::default(),
    );
    assert!(result.is_valid());

    let kinds: Vec<_> = result.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValidationWarningKind::UnreachableNode,
            ValidationWarningKind::DuplicateEnding,
        ]
    );
}
