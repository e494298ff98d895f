//! # Kaizen Code Chunker
//!
//! Structural inventory of a source file: imports, file-scope variables, type
//! definitions, functions, async functions, classes, React-style hooks and
//! components, JSX elements, and whatever text is left between them.
//!
//! ## Architecture
//!
//! ```text
//! Source Code + Language
//!     │
//!     ├──> Tree-sitter Parsing → concrete syntax tree
//!     │
//!     ├──> Greedy Walk (pre-order, explicit stack)
//!     │    ├─> Classify node (import, variable, type, function, class, markup)
//!     │    ├─> Route function/class via hook & component heuristics
//!     │    └─> Matched node consumes its subtree
//!     │
//!     └──> Gap Reconstruction
//!          └─> Lines outside every chunk become other_blocks
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kaizen_code_chunker::{chunk_code, Language};
//!
//! let code = "import os\n\ndef add(a, b):\n    return a + b\n\nprint(add(1, 2))\n";
//!
//! let body = chunk_code(code, Language::Python).unwrap();
//! assert_eq!(body.imports.len(), 1);
//! assert_eq!(body.functions["add"].start_line, 3);
//! assert_eq!(body.other_blocks, vec!["print(add(1, 2))"]);
//! ```

mod chunker;
mod classifier;
mod config;
mod error;
mod gaps;
mod heuristics;
mod language;
mod parser;
mod types;
mod walker;

pub use chunker::Chunker;
pub use classifier::{classify, ANONYMOUS};
pub use config::{ChunkerConfig, CollisionPolicy};
pub use error::{ChunkerError, Result};
pub use gaps::{find_gaps, reconstruct, Gap};
pub use heuristics::{is_component, is_hook};
pub use language::Language;
pub use parser::{parse, parser_for};
pub use types::{
    BodyStats, Category, Chunk, ClassifiedNode, ConstructKind, NamedChunk, ParsedBody,
};
pub use walker::{route, walk};

/// Chunk `source` with the default configuration
pub fn chunk_code(source: &str, language: Language) -> Result<ParsedBody> {
    Chunker::default().chunk_with_language(source, language)
}
