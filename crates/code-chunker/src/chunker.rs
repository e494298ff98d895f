use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::gaps;
use crate::language::Language;
use crate::parser;
use crate::types::ParsedBody;
use crate::walker;
use std::path::Path;

/// Main chunker interface for processing code
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        config
            .validate()
            .expect("Invalid chunker configuration provided");
        Self { config }
    }

    /// Create a chunker, reporting an invalid configuration as an error
    pub fn try_new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(Self { config })
    }

    /// Chunk code given a language identifier such as `"python"` or `"ts"`
    pub fn chunk_str(&self, content: &str, language: &str) -> Result<ParsedBody> {
        let language: Language = language.parse()?;
        self.chunk_with_language(content, language)
    }

    /// Chunk a file, detecting its language from the extension
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<ParsedBody> {
        let path = path.as_ref();
        let language = Language::from_path(path);
        if !language.supports_ast() {
            return Err(ChunkerError::unsupported_language(
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or(language.as_str()),
            ));
        }

        let content = std::fs::read_to_string(path)?;
        self.chunk_with_language(&content, language)
    }

    /// Chunk code with explicit language
    pub fn chunk_with_language(&self, content: &str, language: Language) -> Result<ParsedBody> {
        if !self.config.allows_language(language.as_str()) {
            return Err(ChunkerError::unsupported_language(language.as_str()));
        }

        let tree = parser::parse(content, language)?;
        let source = content.as_bytes();

        let mut body = ParsedBody::default();
        walker::walk(
            tree.root_node(),
            language,
            source,
            &mut body,
            self.config.collision_policy,
            self.config.max_depth,
        )?;

        body.other_blocks =
            gaps::reconstruct(&body.line_ranges(), content, self.config.emit_blank_gaps);

        log::debug!("Chunked {language} source: {}", body.stats());
        Ok(body)
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}
