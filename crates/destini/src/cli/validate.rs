//! Validation command handler.

use super::ValidationOutputFormat;
use destini_narrative::StoryFormat;
use destini_narrative::validator::{
    ValidationConfig, ValidationReport, validate_story_file_with_config,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Aggregate result of a validate run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Story files inspected
    pub total_files: usize,
    /// Files with neither errors nor warnings
    pub clean_files: usize,
    /// Any file had errors
    pub has_errors: bool,
    /// Any file had warnings
    pub has_warnings: bool,
}

impl ValidationOutcome {
    /// Process exit status: 1 on errors, 2 on warnings in strict mode, else 0.
    pub fn exit_code(&self, strict: bool) -> u8 {
        if self.has_errors {
            1
        } else if strict && self.has_warnings {
            2
        } else {
            0
        }
    }
}

/// Handles the validate command.
///
/// # Arguments
///
/// * `path` - Path to a story file or directory
/// * `config` - Validation configuration
/// * `format` - Output format (human or json)
/// * `strict` - Treat warnings as errors in the summary
/// * `quiet` - Only show errors, not warnings
/// * `out` - Destination for the report
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_validate_command(
    path: PathBuf,
    config: &ValidationConfig,
    format: ValidationOutputFormat,
    strict: bool,
    quiet: bool,
    out: &mut dyn Write,
) -> anyhow::Result<ValidationOutcome> {
    tracing::info!("Starting validation");

    let files = if path.is_file() {
        vec![path.clone()]
    } else if path.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&path)? {
            let entry_path = entry?.path();
            if entry_path.is_file() && StoryFormat::is_story_path(&entry_path) {
                files.push(entry_path);
            }
        }
        files.sort();
        files
    } else {
        anyhow::bail!(
            "Path '{}' is neither a file nor a directory",
            path.display()
        );
    };

    let mut outcome = ValidationOutcome::default();
    for file in &files {
        let report = validate_story_file_with_config(file, config);

        outcome.total_files += 1;
        if report.is_valid() && report.warnings.is_empty() {
            outcome.clean_files += 1;
        }
        outcome.has_errors |= !report.is_valid();
        outcome.has_warnings |= !report.warnings.is_empty();

        match format {
            ValidationOutputFormat::Human => output_human(file, &report, quiet, out)?,
            ValidationOutputFormat::Json => output_json(file, &report, out)?,
        }
    }

    if format == ValidationOutputFormat::Human && files.len() > 1 {
        writeln!(out, "\n{}", "=".repeat(80))?;
        writeln!(out, "Validation Summary:")?;
        writeln!(out, "  Total files: {}", outcome.total_files)?;
        writeln!(out, "  Clean files: {}", outcome.clean_files)?;
        writeln!(
            out,
            "  Files with issues: {}",
            outcome.total_files - outcome.clean_files
        )?;
    }

    if format == ValidationOutputFormat::Human {
        let verdict = match outcome.exit_code(strict) {
            1 => "Validation failed",
            2 => "Validation passed with warnings (strict mode)",
            _ if outcome.has_warnings => "Validation passed with warnings",
            _ => "All stories valid",
        };
        writeln!(out, "\n{}", verdict)?;
    }

    tracing::info!(
        files = outcome.total_files,
        errors = outcome.has_errors,
        warnings = outcome.has_warnings,
        "Validation finished"
    );
    Ok(outcome)
}

/// Outputs a report in human-readable form.
fn output_human(
    path: &Path,
    report: &ValidationReport,
    quiet: bool,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let status = if !report.is_valid() {
        "FAIL"
    } else if report.warnings.is_empty() {
        "OK"
    } else {
        "WARN"
    };

    writeln!(out, "\n[{}] {}", status, path.display())?;
    writeln!(out, "{}", "-".repeat(80))?;

    if !report.errors.is_empty() {
        writeln!(out, "\nErrors:")?;
        for (i, error) in report.errors.iter().enumerate() {
            writeln!(out, "\n  {}. {}", i + 1, error.message)?;
            if let Some(suggestion) = &error.suggestion {
                writeln!(out, "\n     Suggestion:")?;
                for line in suggestion.lines() {
                    writeln!(out, "        {}", line)?;
                }
            }
        }
    }

    if !quiet && !report.warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for (i, warning) in report.warnings.iter().enumerate() {
            writeln!(out, "\n  {}. {}", i + 1, warning.message)?;
        }
    }

    if report.is_valid() && report.warnings.is_empty() {
        writeln!(out, "\n  No issues found")?;
    }

    Ok(())
}

/// Outputs a report in JSON format.
fn output_json(path: &Path, report: &ValidationReport, out: &mut dyn Write) -> anyhow::Result<()> {
    use serde_json::json;

    let errors: Vec<serde_json::Value> = report
        .errors
        .iter()
        .map(|e| {
            json!({
                "kind": format!("{:?}", e.kind),
                "message": e.message,
                "suggestion": e.suggestion,
            })
        })
        .collect();

    let warnings: Vec<serde_json::Value> = report
        .warnings
        .iter()
        .map(|w| {
            json!({
                "kind": format!("{:?}", w.kind),
                "message": w.message,
                "nodes": w.nodes,
            })
        })
        .collect();

    let output = json!({
        "valid": report.is_valid(),
        "file": path.display().to_string(),
        "errors": errors,
        "warnings": warnings,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
