//! Story files: the serializable form of a graph.
//!
//! Stories are authored as TOML or JSON with one `[story]` header and an
//! ordered `[[nodes]]` list. A sequence rather than a map keeps authoring
//! order and lets duplicate ids be reported instead of silently merged.

use crate::{GraphPolicy, NarrativeGraph};
use destini_core::{NarrativeNode, NodeId};
use destini_error::{DestiniResult, StoryLoadError, StoryLoadErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Serialization formats understood by the loader.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoryFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl StoryFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`StoryLoadErrorKind::UnsupportedFormat`] for unknown or
    /// missing extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoryLoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_str(extension).map_err(|_| {
            StoryLoadError::new(StoryLoadErrorKind::UnsupportedFormat(
                path.display().to_string(),
            ))
        })
    }

    /// Returns true if `path` has an extension this loader understands.
    pub fn is_story_path(path: impl AsRef<Path>) -> bool {
        Self::from_path(path).is_ok()
    }
}

/// Header of a story file.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct StoryHeader {
    /// Story name
    name: String,
    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Id of the entry node
    start: NodeId,
}

impl StoryHeader {
    /// Creates a header.
    pub fn new(name: impl Into<String>, start: impl Into<NodeId>) -> Self {
        Self {
            name: name.into(),
            description: None,
            start: start.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Unvalidated story data as read from a file.
///
/// # Examples
///
/// ```
/// use destini_narrative::StoryDefinition;
///
/// let story = StoryDefinition::from_toml_str(r#"
///     [story]
///     name = "tiny"
///     start = "a"
///
///     [[nodes]]
///     id = "a"
///     text = "Begin"
///
///     [[nodes.options]]
///     label = "Go"
///     target = "b"
///
///     [[nodes]]
///     id = "b"
///     text = "End"
/// "#).unwrap();
///
/// let graph = story.into_graph().unwrap();
/// assert_eq!(graph.name(), Some("tiny"));
/// assert!(graph.is_terminal("b").unwrap());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct StoryDefinition {
    /// Story header
    story: StoryHeader,
    /// Nodes in authoring order
    #[serde(default)]
    nodes: Vec<NarrativeNode>,
}

impl StoryDefinition {
    /// Creates a definition from parts.
    pub fn new(story: StoryHeader, nodes: Vec<NarrativeNode>) -> Self {
        Self { story, nodes }
    }

    /// Reads a story file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoryLoadError> {
        let path = path.as_ref();
        let format = StoryFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoryLoadError::new(StoryLoadErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        let story = Self::from_str_with_format(&content, format)?;
        info!(
            name = %story.story.name,
            nodes = story.nodes.len(),
            %format,
            "Loaded story file"
        );
        Ok(story)
    }

    /// Parses story text in the given format.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed content.
    pub fn from_str_with_format(content: &str, format: StoryFormat) -> Result<Self, StoryLoadError> {
        match format {
            StoryFormat::Toml => Self::from_toml_str(content),
            StoryFormat::Json => Self::from_json_str(content),
        }
    }

    /// Parses a TOML story.
    ///
    /// # Errors
    ///
    /// Returns [`StoryLoadErrorKind::TomlParse`] for malformed content.
    pub fn from_toml_str(content: &str) -> Result<Self, StoryLoadError> {
        toml::from_str(content)
            .map_err(|e| StoryLoadError::new(StoryLoadErrorKind::TomlParse(e.to_string())))
    }

    /// Parses a JSON story.
    ///
    /// # Errors
    ///
    /// Returns [`StoryLoadErrorKind::JsonParse`] for malformed content.
    pub fn from_json_str(content: &str) -> Result<Self, StoryLoadError> {
        serde_json::from_str(content)
            .map_err(|e| StoryLoadError::new(StoryLoadErrorKind::JsonParse(e.to_string())))
    }

    /// Serializes the story as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`StoryLoadErrorKind::TomlParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, StoryLoadError> {
        toml::to_string_pretty(self)
            .map_err(|e| StoryLoadError::new(StoryLoadErrorKind::TomlParse(e.to_string())))
    }

    /// Serializes the story as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoryLoadErrorKind::JsonParse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, StoryLoadError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StoryLoadError::new(StoryLoadErrorKind::JsonParse(e.to_string())))
    }

    /// Builds a graph under the default policy.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed story data.
    pub fn into_graph(self) -> DestiniResult<NarrativeGraph> {
        self.into_graph_with_policy(GraphPolicy::default())
    }

    /// Builds a graph under the given policy.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed story data or a policy
    /// violation.
    pub fn into_graph_with_policy(self, policy: GraphPolicy) -> DestiniResult<NarrativeGraph> {
        let StoryDefinition { story, nodes } = self;
        debug!(name = %story.name, "Building graph from story definition");

        let graph = NarrativeGraph::build_with_policy(nodes, story.start, policy)?
            .with_name(story.name);
        Ok(match story.description {
            Some(description) => graph.with_description(description),
            None => graph,
        })
    }
}

impl From<&NarrativeGraph> for StoryDefinition {
    fn from(graph: &NarrativeGraph) -> Self {
        let mut header = StoryHeader::new(graph.name().unwrap_or_default(), graph.start().clone());
        if let Some(description) = graph.description() {
            header = header.with_description(description);
        }
        Self::new(header, graph.nodes().cloned().collect())
    }
}

/// Loads a story file and builds its graph in one step.
///
/// # Errors
///
/// Returns a load error or a validation error.
pub fn load_graph(path: impl AsRef<Path>, policy: GraphPolicy) -> DestiniResult<NarrativeGraph> {
    StoryDefinition::from_file(path)?.into_graph_with_policy(policy)
}
