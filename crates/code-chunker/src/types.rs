use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A classified span of source text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// The verbatim source text of the construct
    pub code: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,
}

impl Chunk {
    /// Create a new chunk
    #[must_use]
    pub const fn new(code: String, start_line: usize, end_line: usize) -> Self {
        Self {
            code,
            start_line,
            end_line,
        }
    }

    /// Get the number of lines in this chunk
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    #[must_use]
    pub const fn range(&self) -> (usize, usize) {
        (self.start_line, self.end_line)
    }
}

/// A chunk indexed by its declared identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedChunk {
    pub name: String,

    #[serde(flatten)]
    pub chunk: Chunk,
}

/// Structured inventory of one source file.
///
/// Serializes with one key per [`Category`]. Keyed categories hold at most
/// one chunk per name; which duplicate survives depends on traversal order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedBody {
    pub imports: Vec<Chunk>,
    pub global_variables: Vec<Chunk>,
    pub type_definitions: Vec<NamedChunk>,
    pub functions: BTreeMap<String, Chunk>,
    pub async_functions: BTreeMap<String, Chunk>,
    pub classes: BTreeMap<String, Chunk>,
    pub hooks: BTreeMap<String, Chunk>,
    pub components: BTreeMap<String, Chunk>,
    pub jsx_elements: Vec<Chunk>,
    pub other_blocks: Vec<String>,
}

impl ParsedBody {
    /// Line ranges of every recorded chunk, all categories except `other_blocks`
    #[must_use]
    pub fn line_ranges(&self) -> Vec<(usize, usize)> {
        self.chunks().map(Chunk::range).collect()
    }

    fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        let listed = self
            .imports
            .iter()
            .chain(&self.global_variables)
            .chain(self.type_definitions.iter().map(|named| &named.chunk))
            .chain(&self.jsx_elements);

        let keyed = [
            &self.functions,
            &self.async_functions,
            &self.classes,
            &self.hooks,
            &self.components,
        ]
        .into_iter()
        .flat_map(BTreeMap::values);

        listed.chain(keyed)
    }

    /// Number of classified chunks (`other_blocks` excluded)
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|category| **category != Category::OtherBlocks)
            .map(|category| self.len_of(*category))
            .sum()
    }

    /// True when nothing was recorded, including leftover text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|category| self.len_of(*category) == 0)
    }

    /// Number of entries in one category
    #[must_use]
    pub fn len_of(&self, category: Category) -> usize {
        match category {
            Category::Imports => self.imports.len(),
            Category::GlobalVariables => self.global_variables.len(),
            Category::TypeDefinitions => self.type_definitions.len(),
            Category::Functions => self.functions.len(),
            Category::AsyncFunctions => self.async_functions.len(),
            Category::Classes => self.classes.len(),
            Category::Hooks => self.hooks.len(),
            Category::Components => self.components.len(),
            Category::JsxElements => self.jsx_elements.len(),
            Category::OtherBlocks => self.other_blocks.len(),
        }
    }

    /// Summary counts for logging and reporting
    #[must_use]
    pub fn stats(&self) -> BodyStats {
        let covered_lines = self.chunks().map(Chunk::line_count).sum();

        BodyStats {
            counts: Category::ALL.map(|category| (category, self.len_of(category))),
            covered_lines,
        }
    }
}

/// One of the ten buckets of a [`ParsedBody`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Imports,
    GlobalVariables,
    TypeDefinitions,
    Functions,
    AsyncFunctions,
    Classes,
    Hooks,
    Components,
    JsxElements,
    OtherBlocks,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Imports,
        Category::GlobalVariables,
        Category::TypeDefinitions,
        Category::Functions,
        Category::AsyncFunctions,
        Category::Classes,
        Category::Hooks,
        Category::Components,
        Category::JsxElements,
        Category::OtherBlocks,
    ];

    /// Key used when serializing a [`ParsedBody`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imports => "imports",
            Self::GlobalVariables => "global_variables",
            Self::TypeDefinitions => "type_definitions",
            Self::Functions => "functions",
            Self::AsyncFunctions => "async_functions",
            Self::Classes => "classes",
            Self::Hooks => "hooks",
            Self::Components => "components",
            Self::JsxElements => "jsx_elements",
            Self::OtherBlocks => "other_blocks",
        }
    }
}

/// Coarse construct kind reported by the node classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Import,
    TopLevelVariable,
    TypeAliasOrInterface,
    FunctionLike,
    ClassLike,
    MarkupElement,
}

/// A syntax node recognised by the classifier, detached from the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedNode {
    pub kind: ConstructKind,
    pub name: Option<String>,
    pub code: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl ClassifiedNode {
    #[must_use]
    pub fn into_chunk(self) -> Chunk {
        Chunk::new(self.code, self.start_line, self.end_line)
    }
}

/// Statistics about a parsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyStats {
    pub counts: [(Category, usize); 10],
    pub covered_lines: usize,
}

impl BodyStats {
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}

impl std::fmt::Display for BodyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(category, n)| format!("{}: {n}", category.as_str()))
            .collect();

        if parts.is_empty() {
            write!(f, "empty | covered lines: {}", self.covered_lines)
        } else {
            write!(
                f,
                "{} | covered lines: {}",
                parts.join(" | "),
                self.covered_lines
            )
        }
    }
}
