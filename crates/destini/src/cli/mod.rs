//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the destini binary.

mod commands;
mod validate;
mod walk;

pub use commands::{Cli, Commands, ValidationOutputFormat};
pub use validate::{ValidationOutcome, handle_validate_command};
pub use walk::{WalkSummary, handle_walk_command, walk_story};
