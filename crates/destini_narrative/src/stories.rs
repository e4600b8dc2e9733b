//! Stories shipped with the engine.

use crate::{NarrativeGraph, StoryDefinition};
use destini_error::DestiniResult;

/// TOML source of the hitchhiker story.
pub const DESTINI_TOML: &str = include_str!("../stories/destini.toml");

/// The hitchhiker story from the original Destini game.
///
/// Two of its endings share the same text and one of them is unreachable.
/// Both are permitted under the default policy.
///
/// # Examples
///
/// ```
/// use destini_narrative::stories;
///
/// let graph = stories::destini().unwrap();
/// assert_eq!(graph.start().as_str(), "roadside");
/// assert_eq!(graph.terminal_nodes().count(), 3);
/// ```
///
/// # Errors
///
/// Returns an error only if the embedded data is malformed.
pub fn destini() -> DestiniResult<NarrativeGraph> {
    StoryDefinition::from_toml_str(DESTINI_TOML)?.into_graph()
}
