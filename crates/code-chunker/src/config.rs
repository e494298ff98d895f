use serde::{Deserialize, Serialize};

/// Configuration for code chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Languages to support (empty = all languages with a grammar)
    pub supported_languages: Vec<String>,

    /// What to do when two constructs share a name in a keyed category
    pub collision_policy: CollisionPolicy,

    /// Maximum syntax tree depth the walker will descend to
    pub max_depth: usize,

    /// Emit whitespace-only gaps as empty `other_blocks` entries
    pub emit_blank_gaps: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            supported_languages: vec![],
            collision_policy: CollisionPolicy::Overwrite,
            max_depth: 4096,
            emit_blank_gaps: false,
        }
    }
}

impl ChunkerConfig {
    /// Create config that reports name collisions instead of overwriting
    pub fn strict() -> Self {
        Self {
            collision_policy: CollisionPolicy::Error,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be > 0".to_string());
        }

        if let Some(name) = self
            .supported_languages
            .iter()
            .find(|name| name.trim().is_empty())
        {
            return Err(format!("supported_languages contains a blank entry: {name:?}"));
        }

        Ok(())
    }

    /// Whether `language` passes the `supported_languages` filter
    pub(crate) fn allows_language(&self, language: &str) -> bool {
        self.supported_languages.is_empty()
            || self
                .supported_languages
                .iter()
                .any(|allowed| allowed.trim().eq_ignore_ascii_case(language))
    }
}

/// Behavior for duplicate names in `functions`, `classes`, `hooks`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later occurrence replaces the earlier one
    #[default]
    Overwrite,

    /// Fail with `ChunkerError::NameCollision`
    Error,
}
