//! Story validation with actionable messages.
//!
//! [`NarrativeGraph::build`] stops at the first problem. The validator
//! instead reports every error and warning in a story so an author can fix
//! them in one pass.

use crate::{GraphPolicy, NarrativeGraph, StoryDefinition, StoryFormat};
use destini_core::NodeId;
use destini_error::{StoryLoadErrorKind, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Result of validating a story.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a report with no errors or warnings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationIssue) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats errors as a human-readable string.
    pub fn format_errors(&self) -> String {
        let mut output = String::new();

        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                output.push_str("\n\n");
            }
            output.push_str(&format!("Error {}: {}", i + 1, error.message));

            if let Some(suggestion) = &error.suggestion {
                output.push_str(&format!("\n\n  Suggestion: {}", suggestion));
            }
        }

        output
    }

    /// Formats warnings as a human-readable string.
    pub fn format_warnings(&self) -> String {
        let mut output = String::new();

        for (i, warning) in self.warnings.iter().enumerate() {
            if i > 0 {
                output.push_str("\n\n");
            }
            output.push_str(&format!("Warning {}: {}", i + 1, warning.message));
        }

        output
    }
}

/// A validation error with a fix suggestion.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Type of validation error
    pub kind: ValidationIssueKind,
    /// Human-readable error message
    pub message: String,
    /// Suggestion on how to fix the error
    pub suggestion: Option<String>,
}

/// A validation warning that should be reviewed.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Type of validation warning
    pub kind: ValidationWarningKind,
    /// Nodes the warning is about
    pub nodes: Vec<NodeId>,
    /// Human-readable warning message
    pub message: String,
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssueKind {
    /// File content does not parse
    InvalidSyntax,
    /// File could not be read
    FileNotFound,
    /// File extension is not a story format
    UnsupportedFormat,
    /// Story has no nodes
    EmptyStory,
    /// Node id defined twice
    DuplicateNode,
    /// Start id names no node
    MissingStart,
    /// Option targets a node that does not exist
    DanglingTarget,
    /// Node cannot be reached and the policy forbids it
    UnreachableNode,
}

/// Types of validation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningKind {
    /// Node cannot be reached from the start node
    UnreachableNode,
    /// Several endings share the same text
    DuplicateEnding,
    /// Nodes from which no ending can be reached
    NoEnding,
    /// Option with a blank label
    EmptyLabel,
}

/// Configuration for validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Accept unreachable nodes (reported as warnings) instead of rejecting them
    pub allow_unreachable: bool,
    /// Warn on unreachable nodes when they are allowed
    pub warn_unreachable: bool,
    /// Warn on endings with identical text
    pub warn_duplicate_endings: bool,
    /// Warn on nodes that can never reach an ending
    pub warn_missing_endings: bool,
    /// Warn on options with blank labels
    pub warn_empty_labels: bool,
}

impl ValidationConfig {
    /// Graph policy matching this configuration.
    pub fn policy(&self) -> GraphPolicy {
        GraphPolicy {
            allow_unreachable: self.allow_unreachable,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_unreachable: true,
            warn_unreachable: true,
            warn_duplicate_endings: true,
            warn_missing_endings: true,
            warn_empty_labels: true,
        }
    }
}

/// Validates a parsed story.
///
/// # Examples
///
/// ```
/// use destini_core::{NarrativeNode, NarrativeOption};
/// use destini_narrative::validator::{ValidationConfig, ValidationIssueKind, validate_story};
/// use destini_narrative::{StoryDefinition, StoryHeader};
///
/// let story = StoryDefinition::new(
///     StoryHeader::new("broken", "a"),
///     vec![NarrativeNode::new("a", "A", vec![NarrativeOption::new("Go", "nowhere")])],
/// );
///
/// let report = validate_story(&story, &ValidationConfig::default());
/// assert!(!report.is_valid());
/// assert_eq!(report.errors[0].kind, ValidationIssueKind::DanglingTarget);
/// ```
#[instrument(skip_all, fields(name = %story.story().name()))]
pub fn validate_story(story: &StoryDefinition, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    // Phase 1: structural checks, all reported
    check_structure(story, &mut report);

    if config.warn_empty_labels {
        check_empty_labels(story, &mut report);
    }

    // Phase 2: graph analysis needs a well-formed graph
    if report.is_valid() {
        match NarrativeGraph::build(story.nodes().clone(), story.story().start().clone()) {
            Ok(graph) => analyze_graph(&graph, config, &mut report),
            Err(e) => report.add_error(issue_for(e.kind())),
        }
    }

    info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Story validated"
    );
    report
}

/// Validates story text in the given format.
pub fn validate_story_str(
    content: &str,
    format: StoryFormat,
    config: &ValidationConfig,
) -> ValidationReport {
    match StoryDefinition::from_str_with_format(content, format) {
        Ok(story) => validate_story(&story, config),
        Err(e) => {
            let mut report = ValidationReport::new();
            report.add_error(ValidationIssue {
                kind: ValidationIssueKind::InvalidSyntax,
                message: e.kind.to_string(),
                suggestion: Some(
                    "Check for syntax errors like missing quotes, unmatched brackets, or a missing [story] section.".to_string(),
                ),
            });
            report
        }
    }
}

/// Validates a story file with the default configuration.
pub fn validate_story_file(path: impl AsRef<Path>) -> ValidationReport {
    validate_story_file_with_config(path, &ValidationConfig::default())
}

/// Validates a story file with custom configuration.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn validate_story_file_with_config(
    path: impl AsRef<Path>,
    config: &ValidationConfig,
) -> ValidationReport {
    let path = path.as_ref();
    let mut report = ValidationReport::new();

    let format = match StoryFormat::from_path(path) {
        Ok(format) => format,
        Err(e) => {
            report.add_error(ValidationIssue {
                kind: ValidationIssueKind::UnsupportedFormat,
                message: e.kind.to_string(),
                suggestion: Some("Use a .toml or .json extension.".to_string()),
            });
            return report;
        }
    };

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            report.add_error(ValidationIssue {
                kind: ValidationIssueKind::FileNotFound,
                message: StoryLoadErrorKind::FileRead(format!("{}: {}", path.display(), e))
                    .to_string(),
                suggestion: Some("Check that the file exists and is readable.".to_string()),
            });
            return report;
        }
    };

    validate_story_str(&content, format, config)
}

/// Reports every duplicate id, a missing start, and every dangling target.
fn check_structure(story: &StoryDefinition, report: &mut ValidationReport) {
    let nodes = story.nodes();
    if nodes.is_empty() {
        report.add_error(issue_for(&ValidationErrorKind::EmptyStory));
        return;
    }

    let mut counts: HashMap<&NodeId, usize> = HashMap::new();
    for node in nodes {
        *counts.entry(node.id()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    for node in nodes {
        if counts[node.id()] > 1 && reported.insert(node.id()) {
            report.add_error(issue_for(&ValidationErrorKind::DuplicateNode(
                node.id().to_string(),
            )));
        }
    }

    let start = story.story().start();
    if !counts.contains_key(start) {
        report.add_error(issue_for(&ValidationErrorKind::MissingStart(
            start.to_string(),
        )));
    }

    for node in nodes {
        for (option_index, option) in node.options().iter().enumerate() {
            if !counts.contains_key(option.target()) {
                report.add_error(issue_for(&ValidationErrorKind::DanglingTarget {
                    node: node.id().to_string(),
                    option_index,
                    target: option.target().to_string(),
                }));
            }
        }
    }
}

fn check_empty_labels(story: &StoryDefinition, report: &mut ValidationReport) {
    for node in story.nodes() {
        for (option_index, option) in node.options().iter().enumerate() {
            if option.label().trim().is_empty() {
                report.add_warning(ValidationWarning {
                    kind: ValidationWarningKind::EmptyLabel,
                    nodes: vec![node.id().clone()],
                    message: format!(
                        "Option {} of node '{}' has an empty label",
                        option_index,
                        node.id()
                    ),
                });
            }
        }
    }
}

fn analyze_graph(graph: &NarrativeGraph, config: &ValidationConfig, report: &mut ValidationReport) {
    for orphan in graph.unreachable_nodes() {
        if !config.allow_unreachable {
            report.add_error(issue_for(&ValidationErrorKind::UnreachableNode(
                orphan.to_string(),
            )));
        } else if config.warn_unreachable {
            report.add_warning(ValidationWarning {
                kind: ValidationWarningKind::UnreachableNode,
                nodes: vec![orphan.clone()],
                message: format!("Node '{}' is unreachable from the start node", orphan),
            });
        }
    }

    if config.warn_duplicate_endings {
        for group in graph.duplicate_endings() {
            report.add_warning(ValidationWarning {
                kind: ValidationWarningKind::DuplicateEnding,
                message: format!("Endings {} have identical text", quote_ids(&group)),
                nodes: group.into_iter().cloned().collect(),
            });
        }
    }

    if config.warn_missing_endings {
        let trapped = graph.nodes_without_ending();
        if !trapped.is_empty() {
            report.add_warning(ValidationWarning {
                kind: ValidationWarningKind::NoEnding,
                message: format!(
                    "No ending can be reached from {}; players there can only restart",
                    quote_ids(&trapped)
                ),
                nodes: trapped.into_iter().cloned().collect(),
            });
        }
    }

    debug!(nodes = graph.len(), "Graph analysis complete");
}

fn quote_ids(ids: &[&NodeId]) -> String {
    ids.iter()
        .map(|id| format!("'{}'", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts a structural error into a report entry with a fix suggestion.
fn issue_for(kind: &ValidationErrorKind) -> ValidationIssue {
    let (issue_kind, suggestion) = match kind {
        ValidationErrorKind::EmptyStory => (
            ValidationIssueKind::EmptyStory,
            "Add at least one node:\n\n[[nodes]]\nid = \"start\"\ntext = \"...\"".to_string(),
        ),
        ValidationErrorKind::DuplicateNode(id) => (
            ValidationIssueKind::DuplicateNode,
            format!("Rename one of the nodes with id '{}'", id),
        ),
        ValidationErrorKind::MissingStart(id) => (
            ValidationIssueKind::MissingStart,
            format!(
                "Set [story] start to an existing node id, or add:\n\n[[nodes]]\nid = \"{}\"\ntext = \"...\"",
                id
            ),
        ),
        ValidationErrorKind::DanglingTarget { target, .. } => (
            ValidationIssueKind::DanglingTarget,
            format!(
                "Fix the option's target, or add the node:\n\n[[nodes]]\nid = \"{}\"\ntext = \"...\"",
                target
            ),
        ),
        ValidationErrorKind::UnreachableNode(id) => (
            ValidationIssueKind::UnreachableNode,
            format!("Add an option targeting '{}' or remove the node", id),
        ),
    };

    ValidationIssue {
        kind: issue_kind,
        message: kind.to_string(),
        suggestion: Some(suggestion),
    }
}
