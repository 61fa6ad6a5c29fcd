//! Tree-sitter based parsing utilities shared across language extractors.

use tree_sitter::{Language, Node, Parser as TSParser, Tree};

use super::error::ExtractionError;

/// Base tree-sitter parser with shared functionality.
pub struct TreeSitterBase {
    language: Language,
    language_name: &'static str,
}

impl TreeSitterBase {
    pub fn new(language: Language, language_name: &'static str) -> Self {
        Self { language, language_name }
    }

    /// Parse source code into a tree-sitter tree.
    ///
    /// Fails if the tree contains any ERROR or MISSING node, so callers never
    /// see a partially recovered tree.
    pub fn parse_tree(&self, unit: &str, content: &str) -> Result<Tree, ExtractionError> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractionError::Grammar {
                language: self.language_name.to_string(),
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| ExtractionError::NoTree {
                unit: unit.to_string(),
                language: self.language_name.to_string(),
            })?;

        if let Some(error) = first_error(tree.root_node()) {
            let position = error.start_position();
            return Err(ExtractionError::Syntax {
                unit: unit.to_string(),
                language: self.language_name.to_string(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(tree)
    }

    /// Get text for a node from source content.
    pub fn node_text<'a>(node: &Node, content: &'a str) -> &'a str {
        &content[node.byte_range()]
    }

    /// All direct children, named and anonymous.
    pub fn children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        children
    }

    /// First direct child whose kind is one of `kinds`.
    pub fn child_of_kind<'t>(node: &Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
        Self::children(node).into_iter().find(|c| kinds.contains(&c.kind()))
    }

    /// All direct children whose kind is one of `kinds`.
    pub fn children_of_kind<'t>(node: &Node<'t>, kinds: &[&str]) -> Vec<Node<'t>> {
        Self::children(node)
            .into_iter()
            .filter(|c| kinds.contains(&c.kind()))
            .collect()
    }

    /// Whether a direct child token of the given kind exists (e.g. `val`, `interface`).
    pub fn has_child_kind(node: &Node, kind: &str) -> bool {
        Self::children(node).iter().any(|c| c.kind() == kind)
    }

    /// Keywords inside the node's `modifiers` child, annotations excluded.
    pub fn modifier_keywords(node: &Node, content: &str) -> Vec<String> {
        let Some(modifiers) = Self::child_of_kind(node, &["modifiers"]) else {
            return Vec::new();
        };

        Self::children(&modifiers)
            .into_iter()
            .filter(|m| !m.kind().contains("annotation"))
            .map(|m| Self::node_text(&m, content).trim().to_string())
            .filter(|text| !text.is_empty() && !text.starts_with('@'))
            .collect()
    }
}

/// First ERROR or MISSING node in document order.
///
/// Zero-width automatic semicolons are not errors: the Kotlin grammar inserts
/// them before a closing brace on the same line.
fn first_error(node: Node) -> Option<Node> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() {
        return Some(node);
    }
    if node.is_missing() {
        return (!is_automatic_semicolon(&node)).then_some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn is_automatic_semicolon(node: &Node) -> bool {
    node.start_byte() == node.end_byte() && node.kind().contains("semi")
}
