use crate::classifier::{classify, ANONYMOUS};
use crate::config::CollisionPolicy;
use crate::error::{ChunkerError, Result};
use crate::heuristics::{is_component, is_hook, starts_with_async};
use crate::language::Language;
use crate::types::{Category, Chunk, ClassifiedNode, ConstructKind, NamedChunk, ParsedBody};
use std::collections::BTreeMap;
use tree_sitter::Node;

/// Pick the [`ParsedBody`] slot for a classified node.
///
/// Function-like nodes try hook, component, then async before settling on
/// `functions`; class-like nodes try component before `classes`.
pub fn route(classified: &ClassifiedNode) -> Category {
    match classified.kind {
        ConstructKind::Import => Category::Imports,
        ConstructKind::TopLevelVariable => Category::GlobalVariables,
        ConstructKind::TypeAliasOrInterface => Category::TypeDefinitions,
        ConstructKind::MarkupElement => Category::JsxElements,
        ConstructKind::FunctionLike => {
            let name = classified.name.as_deref().unwrap_or(ANONYMOUS);
            if is_hook(name) {
                Category::Hooks
            } else if is_component(&classified.code) {
                Category::Components
            } else if starts_with_async(&classified.code) {
                Category::AsyncFunctions
            } else {
                Category::Functions
            }
        }
        ConstructKind::ClassLike => {
            if is_component(&classified.code) {
                Category::Components
            } else {
                Category::Classes
            }
        }
    }
}

/// Greedy pre-order walk from `root`, recording every classified node.
///
/// A matched node consumes its whole subtree. Unmatched nodes have their
/// children visited in source order. The traversal uses an explicit stack so
/// nesting depth is bounded by `max_depth` rather than the call stack.
pub fn walk(
    root: Node<'_>,
    language: Language,
    source: &[u8],
    body: &mut ParsedBody,
    policy: CollisionPolicy,
    max_depth: usize,
) -> Result<()> {
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(ChunkerError::DepthLimitExceeded { limit: max_depth });
        }

        if let Some(classified) = classify(node, language, source) {
            log::trace!(
                "{:?} {} at lines {}-{}",
                classified.kind,
                classified.name.as_deref().unwrap_or("-"),
                classified.start_line,
                classified.end_line
            );
            record(body, classified, policy)?;
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    Ok(())
}

fn record(body: &mut ParsedBody, classified: ClassifiedNode, policy: CollisionPolicy) -> Result<()> {
    let category = route(&classified);
    let name = classified
        .name
        .clone()
        .unwrap_or_else(|| ANONYMOUS.to_string());
    let chunk = classified.into_chunk();

    match category {
        Category::Imports => body.imports.push(chunk),
        Category::GlobalVariables => body.global_variables.push(chunk),
        Category::TypeDefinitions => body.type_definitions.push(NamedChunk { name, chunk }),
        Category::JsxElements => body.jsx_elements.push(chunk),
        Category::OtherBlocks => unreachable!("route never assigns other_blocks"),
        Category::Functions => insert_keyed(&mut body.functions, category, name, chunk, policy)?,
        Category::AsyncFunctions => {
            insert_keyed(&mut body.async_functions, category, name, chunk, policy)?;
        }
        Category::Classes => insert_keyed(&mut body.classes, category, name, chunk, policy)?,
        Category::Hooks => insert_keyed(&mut body.hooks, category, name, chunk, policy)?,
        Category::Components => insert_keyed(&mut body.components, category, name, chunk, policy)?,
    }

    Ok(())
}

fn insert_keyed(
    entries: &mut BTreeMap<String, Chunk>,
    category: Category,
    name: String,
    chunk: Chunk,
    policy: CollisionPolicy,
) -> Result<()> {
    if let Some(previous) = entries.get(&name) {
        match policy {
            CollisionPolicy::Error => {
                return Err(ChunkerError::NameCollision {
                    category: category.as_str(),
                    name,
                });
            }
            CollisionPolicy::Overwrite => log::debug!(
                "{} `{name}` at lines {}-{} replaces lines {}-{}",
                category.as_str(),
                chunk.start_line,
                chunk.end_line,
                previous.start_line,
                previous.end_line
            ),
        }
    }

    entries.insert(name, chunk);
    Ok(())
}
