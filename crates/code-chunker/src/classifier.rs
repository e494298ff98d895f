use crate::language::Language;
use crate::types::{ClassifiedNode, ConstructKind};
use tree_sitter::{Node, Point};

/// Key used for function-like and class-like nodes without a declared name
pub const ANONYMOUS: &str = "<anonymous>";

/// Syntactic tags the classifier recognises, independent of grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeTag {
    Import,
    Variable,
    /// Python `expression_statement`, a variable only when it wraps an assignment
    Statement,
    TypeAlias,
    Interface,
    Function,
    Class,
    /// Rust `impl` block, named after its target type
    Impl,
    Markup,
}

impl NodeTag {
    fn of(language: Language, kind: &str) -> Option<Self> {
        match language {
            Language::JavaScript | Language::TypeScript | Language::Tsx => match kind {
                "import_statement" => Some(Self::Import),
                "lexical_declaration" | "variable_declaration" => Some(Self::Variable),
                "type_alias_declaration" => Some(Self::TypeAlias),
                "interface_declaration" => Some(Self::Interface),
                "function_declaration" | "generator_function_declaration" => Some(Self::Function),
                "class_declaration" | "abstract_class_declaration" => Some(Self::Class),
                "jsx_element" | "jsx_self_closing_element" => Some(Self::Markup),
                _ => None,
            },
            Language::Python => match kind {
                "import_statement" | "import_from_statement" | "future_import_statement" => {
                    Some(Self::Import)
                }
                "expression_statement" => Some(Self::Statement),
                "type_alias_statement" => Some(Self::TypeAlias),
                "function_definition" => Some(Self::Function),
                "class_definition" => Some(Self::Class),
                _ => None,
            },
            Language::Rust => match kind {
                "use_declaration" | "extern_crate_declaration" => Some(Self::Import),
                "const_item" | "static_item" => Some(Self::Variable),
                "type_item" => Some(Self::TypeAlias),
                "trait_item" => Some(Self::Interface),
                "function_item" => Some(Self::Function),
                "struct_item" | "enum_item" | "union_item" => Some(Self::Class),
                "impl_item" => Some(Self::Impl),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Decide whether `node` is a recognised construct and detach its text.
///
/// `None` means the walker should look at the node's children instead.
pub fn classify(node: Node<'_>, language: Language, source: &[u8]) -> Option<ClassifiedNode> {
    let tag = NodeTag::of(language, node.kind())?;

    let (kind, name) = match tag {
        NodeTag::Import => (ConstructKind::Import, None),
        NodeTag::Variable => {
            if !is_file_scope(node) {
                return None;
            }
            (ConstructKind::TopLevelVariable, None)
        }
        NodeTag::Statement => {
            if !is_file_scope(node) || !wraps_assignment(node) {
                return None;
            }
            (ConstructKind::TopLevelVariable, None)
        }
        NodeTag::TypeAlias => {
            let name = node
                .child_by_field_name("left")
                .map(|left| node_text(left, source))
                .or_else(|| declared_name(node, source));
            (ConstructKind::TypeAliasOrInterface, name)
        }
        NodeTag::Interface => (ConstructKind::TypeAliasOrInterface, declared_name(node, source)),
        NodeTag::Function => (ConstructKind::FunctionLike, declared_name(node, source)),
        NodeTag::Class => (ConstructKind::ClassLike, declared_name(node, source)),
        NodeTag::Impl => (ConstructKind::ClassLike, impl_name(node, source)),
        NodeTag::Markup => (ConstructKind::MarkupElement, None),
    };

    let (start_line, end_line) = line_span(node);

    Some(ClassifiedNode {
        kind,
        name,
        code: node_text(node, source),
        start_line,
        end_line,
    })
}

/// The node's parent is the tree root. The root itself never qualifies.
fn is_file_scope(node: Node<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.parent().is_none())
}

fn wraps_assignment(statement: Node<'_>) -> bool {
    statement
        .named_child(0)
        .is_some_and(|child| matches!(child.kind(), "assignment" | "augmented_assignment"))
}

fn line_span(node: Node<'_>) -> (usize, usize) {
    lines_between(node.start_position(), node.end_position())
}

/// 1-indexed inclusive lines. A span ending at column 0 stops on the previous line.
fn lines_between(start: Point, end: Point) -> (usize, usize) {
    let end_row = if end.column == 0 && end.row > start.row {
        end.row - 1
    } else {
        end.row
    };
    (start.row + 1, end_row + 1)
}

fn node_text(node: Node<'_>, source: &[u8]) -> String {
    String::from_utf8_lossy(&source[node.start_byte()..node.end_byte()]).into_owned()
}

fn declared_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(node_text(name, source));
    }

    let mut cursor = node.walk();
    let name = node
        .children(&mut cursor)
        .find(|child| {
            matches!(
                child.kind(),
                "identifier" | "type_identifier" | "name" | "property_identifier"
            )
        })
        .map(|child| node_text(child, source));
    name
}

/// `impl Point` or `impl Display for Point`
fn impl_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let target = node.child_by_field_name("type")?;
    let target = node_text(target, source);

    match node.child_by_field_name("trait") {
        Some(trait_node) => Some(format!("impl {} for {target}", node_text(trait_node, source))),
        None => Some(format!("impl {target}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn find<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        children.into_iter().find_map(|child| find(child, kind))
    }

    fn classify_first(source: &str, language: Language, kind: &str) -> Option<ClassifiedNode> {
        let tree = parse(source, language).unwrap();
        let node = find(tree.root_node(), kind).expect("node kind present in fixture");
        classify(node, language, source.as_bytes())
    }

    #[test]
    fn test_python_function_name_and_span() {
        let code = "import os\n\ndef add(a, b):\n    return a + b\n";
        let result = classify_first(code, Language::Python, "function_definition").unwrap();
        assert_eq!(result.kind, ConstructKind::FunctionLike);
        assert_eq!(result.name.as_deref(), Some("add"));
        assert_eq!((result.start_line, result.end_line), (3, 4));
        assert_eq!(result.code, "def add(a, b):\n    return a + b");
    }

    #[test]
    fn test_python_assignment_only_at_module_scope() {
        let code = "LIMIT = 10\n\ndef f():\n    local = 1\n    return local\n";
        let tree = parse(code, Language::Python).unwrap();
        let root = tree.root_node();

        let top = root.named_child(0).unwrap();
        let result = classify(top, Language::Python, code.as_bytes()).unwrap();
        assert_eq!(result.kind, ConstructKind::TopLevelVariable);
        assert_eq!(result.code, "LIMIT = 10");
        assert!(result.name.is_none());

        let function = root.named_child(1).unwrap();
        let nested = find(function, "expression_statement").unwrap();
        assert!(classify(nested, Language::Python, code.as_bytes()).is_none());
    }

    #[test]
    fn test_python_call_statement_is_not_a_variable() {
        assert!(classify_first("print('hi')\n", Language::Python, "expression_statement").is_none());
    }

    #[test]
    fn test_root_is_never_classified() {
        let code = "x = 1\n";
        let tree = parse(code, Language::Python).unwrap();
        assert!(classify(tree.root_node(), Language::Python, code.as_bytes()).is_none());
    }

    #[test]
    fn test_js_exported_variable_is_not_file_scope() {
        let code = "export const a = 1;\nconst b = 2;\n";
        let tree = parse(code, Language::JavaScript).unwrap();
        let root = tree.root_node();

        let exported = find(root.child(0).unwrap(), "lexical_declaration").unwrap();
        assert!(classify(exported, Language::JavaScript, code.as_bytes()).is_none());

        let plain = root.child(1).unwrap();
        let result = classify(plain, Language::JavaScript, code.as_bytes()).unwrap();
        assert_eq!(result.kind, ConstructKind::TopLevelVariable);
        assert_eq!(result.start_line, 2);
    }

    #[test]
    fn test_typescript_type_definitions() {
        let code = "type Id = string;\ninterface User {\n  id: Id;\n}\n";
        let alias = classify_first(code, Language::TypeScript, "type_alias_declaration").unwrap();
        assert_eq!(alias.kind, ConstructKind::TypeAliasOrInterface);
        assert_eq!(alias.name.as_deref(), Some("Id"));

        let interface = classify_first(code, Language::TypeScript, "interface_declaration").unwrap();
        assert_eq!(interface.name.as_deref(), Some("User"));
        assert_eq!((interface.start_line, interface.end_line), (2, 4));
    }

    #[test]
    fn test_tsx_markup_element() {
        let code = "render(<App title=\"x\" />);\n";
        let result = classify_first(code, Language::Tsx, "jsx_self_closing_element").unwrap();
        assert_eq!(result.kind, ConstructKind::MarkupElement);
        assert_eq!(result.code, "<App title=\"x\" />");
    }

    #[test]
    fn test_rust_impl_names() {
        let code = "struct Point;\nimpl Point {}\nimpl Default for Point {\n    fn default() -> Self { Point }\n}\n";
        let tree = parse(code, Language::Rust).unwrap();
        let root = tree.root_node();
        let names: Vec<_> = (0..root.named_child_count())
            .filter_map(|i| root.named_child(i))
            .filter_map(|node| classify(node, Language::Rust, code.as_bytes()))
            .map(|result| (result.kind, result.name.unwrap()))
            .collect();

        assert_eq!(
            names,
            vec![
                (ConstructKind::ClassLike, "Point".to_string()),
                (ConstructKind::ClassLike, "impl Point".to_string()),
                (ConstructKind::ClassLike, "impl Default for Point".to_string()),
            ]
        );
    }

    #[test]
    fn test_rust_items() {
        let code = "use std::fmt;\nconst MAX: u32 = 3;\ntype Pair = (u8, u8);\ntrait Shape {}\n";
        let tree = parse(code, Language::Rust).unwrap();
        let root = tree.root_node();
        let kinds: Vec<_> = (0..root.named_child_count())
            .filter_map(|i| root.named_child(i))
            .filter_map(|node| classify(node, Language::Rust, code.as_bytes()))
            .map(|result| (result.kind, result.start_line))
            .collect();

        assert_eq!(
            kinds,
            vec![
                (ConstructKind::Import, 1),
                (ConstructKind::TopLevelVariable, 2),
                (ConstructKind::TypeAliasOrInterface, 3),
                (ConstructKind::TypeAliasOrInterface, 4),
            ]
        );
    }

    #[test]
    fn test_python_type_alias_named_by_left() {
        let code = "type Point = tuple[int, int]\n";
        let result = classify_first(code, Language::Python, "type_alias_statement").unwrap();
        assert_eq!(result.kind, ConstructKind::TypeAliasOrInterface);
        assert_eq!(result.name.as_deref(), Some("Point"));
    }

    #[test]
    fn test_python_augmented_assignment_and_future_import() {
        let code = "from __future__ import annotations\nCOUNT = 0\nCOUNT += 1\n";
        let tree = parse(code, Language::Python).unwrap();
        let root = tree.root_node();
        let kinds: Vec<_> = (0..root.named_child_count())
            .filter_map(|i| root.named_child(i))
            .filter_map(|node| classify(node, Language::Python, code.as_bytes()))
            .map(|result| (result.kind, result.code))
            .collect();

        assert_eq!(
            kinds,
            vec![
                (ConstructKind::Import, "from __future__ import annotations".to_string()),
                (ConstructKind::TopLevelVariable, "COUNT = 0".to_string()),
                (ConstructKind::TopLevelVariable, "COUNT += 1".to_string()),
            ]
        );
    }

    #[test]
    fn test_js_generator_function() {
        let code = "function* ids() {\n  yield 1;\n}\n";
        let result =
            classify_first(code, Language::JavaScript, "generator_function_declaration").unwrap();
        assert_eq!(result.kind, ConstructKind::FunctionLike);
        assert_eq!(result.name.as_deref(), Some("ids"));
        assert_eq!((result.start_line, result.end_line), (1, 3));
    }

    #[test]
    fn test_typescript_abstract_class() {
        let code = "abstract class Shape {\n  abstract area(): number;\n}\n";
        let result =
            classify_first(code, Language::TypeScript, "abstract_class_declaration").unwrap();
        assert_eq!(result.kind, ConstructKind::ClassLike);
        assert_eq!(result.name.as_deref(), Some("Shape"));
    }

    #[test]
    fn test_rust_extern_static_union() {
        let code = "extern crate alloc;\nstatic COUNT: u32 = 0;\nunion Bits {\n    i: u32,\n    f: f32,\n}\n";
        let tree = parse(code, Language::Rust).unwrap();
        let root = tree.root_node();
        let kinds: Vec<_> = (0..root.named_child_count())
            .filter_map(|i| root.named_child(i))
            .filter_map(|node| classify(node, Language::Rust, code.as_bytes()))
            .map(|result| (result.kind, result.name, result.start_line, result.end_line))
            .collect();

        assert_eq!(
            kinds,
            vec![
                (ConstructKind::Import, None, 1, 1),
                (ConstructKind::TopLevelVariable, None, 2, 2),
                (ConstructKind::ClassLike, Some("Bits".to_string()), 3, 6),
            ]
        );
    }

    #[test]
    fn test_span_ending_at_column_zero_stops_on_previous_line() {
        assert_eq!(lines_between(Point::new(2, 4), Point::new(5, 0)), (3, 5));
        assert_eq!(lines_between(Point::new(2, 4), Point::new(5, 1)), (3, 6));
        // a single-row node is never pulled back before its start
        assert_eq!(lines_between(Point::new(0, 0), Point::new(0, 0)), (1, 1));
    }

    #[test]
    fn test_unregistered_kind_is_no_match() {
        let code = "if (a) { b(); }\n";
        assert!(classify_first(code, Language::JavaScript, "if_statement").is_none());
    }
}
