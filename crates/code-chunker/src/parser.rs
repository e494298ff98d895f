//! Tree-sitter parser adapter.

use crate::error::{ChunkerError, Result};
use crate::language::Language;
use tree_sitter::{Parser, Tree};

/// Build a parser configured with the grammar for `language`
pub fn parser_for(language: Language) -> Result<Parser> {
    if !language.supports_ast() {
        return Err(ChunkerError::unsupported_language(language.as_str()));
    }

    let ts_language = language.tree_sitter_language()?;
    let mut parser = Parser::new();
    parser
        .set_language(&ts_language)
        .map_err(|e| ChunkerError::tree_sitter(format!("Failed to set language: {e}")))?;

    Ok(parser)
}

/// Parse `source` into a concrete syntax tree
pub fn parse(source: &str, language: Language) -> Result<Tree> {
    let mut parser = parser_for(language)?;
    parser
        .parse(source, None)
        .ok_or_else(|| ChunkerError::parse(format!("Failed to parse {language} source")))
}
