//! Small helpers shared by the parser and the edit resolver

use tree_sitter::Node;

/// The slice of the original source covered by `node`.
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

/// Unquote a string literal node's text (`'x'` / `"x"` -> `x`).
pub fn unquote(text: &str) -> &str {
    text.trim_matches(|c| c == '\'' || c == '"' || c == '`')
}
