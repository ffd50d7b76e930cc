//! Small helpers over tree-sitter nodes shared by the extraction passes.

use layout_lint_core::Span;
use tree_sitter::Node;

/// Node kinds that start a new function scope.
pub(crate) const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "arrow_function",
    "method_definition",
];

/// Node kinds that carry type information only.
const TYPE_KINDS: &[&str] = &[
    "type_annotation",
    "type_arguments",
    "type_parameters",
    "type_alias_declaration",
    "interface_declaration",
];

pub(crate) fn text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

pub(crate) fn span(node: Node<'_>) -> Span {
    let pos = node.start_position();
    Span::new(node.start_byte(), node.end_byte(), pos.row + 1, pos.column + 1)
}

pub(crate) fn is_function(node: Node<'_>) -> bool {
    FUNCTION_KINDS.contains(&node.kind())
}

pub(crate) fn is_type_only(node: Node<'_>) -> bool {
    TYPE_KINDS.contains(&node.kind())
}

/// First named child that is not a comment.
pub(crate) fn first_named(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment");
    found
}

/// Named, non-comment children in source order.
pub(crate) fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect()
}

/// A JSX element, self-closing element or fragment.
pub(crate) fn is_jsx(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "jsx_element" | "jsx_self_closing_element" | "jsx_fragment"
    )
}

/// JSX, or JSX wrapped in exactly one pair of parentheses.
pub(crate) fn is_view_output(node: Node<'_>) -> bool {
    if is_jsx(node) {
        return true;
    }
    node.kind() == "parenthesized_expression" && first_named(node).is_some_and(is_jsx)
}

/// Expression returned by a `return_statement`, if any.
pub(crate) fn returned_expression(node: Node<'_>) -> Option<Node<'_>> {
    first_named(node)
}
