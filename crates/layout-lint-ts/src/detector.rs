//! Component detection.
//!
//! A function-like node is a component when it is bound to a name starting
//! with an uppercase ASCII letter and at least one of its top-level return
//! statements (or its expression body) produces JSX.

use tree_sitter::Node;

use crate::syntax::{self, is_view_output, returned_expression, text};

/// Function kinds that can be components.
const CANDIDATE_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "arrow_function",
];

/// Returns the component name of `node`, or `None` if it is not a component.
pub(crate) fn component_name(node: Node<'_>, src: &[u8]) -> Option<String> {
    if !CANDIDATE_KINDS.contains(&node.kind()) {
        return None;
    }

    let name = bound_name(node, src)?;
    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }

    returns_view(node).then(|| name.to_owned())
}

/// Name a function is known by: the identifier of the variable it
/// initialises, else its own identifier.
fn bound_name<'a>(node: Node<'_>, src: &'a [u8]) -> Option<&'a str> {
    if let Some(parent) = node.parent().filter(|p| p.kind() == "variable_declarator") {
        let is_value = parent
            .child_by_field_name("value")
            .is_some_and(|value| value.id() == node.id());
        if is_value {
            let target = parent.child_by_field_name("name")?;
            return (target.kind() == "identifier").then(|| text(target, src));
        }
    }

    node.child_by_field_name("name").map(|name| text(name, src))
}

/// Whether the function produces JSX from a top-level return or its
/// expression body.
pub(crate) fn returns_view(node: Node<'_>) -> bool {
    let Some(body) = node.child_by_field_name("body") else {
        return false;
    };

    if body.kind() != "statement_block" {
        return is_view_output(body);
    }

    syntax::named_children(body)
        .into_iter()
        .filter(|s| s.kind() == "return_statement")
        .filter_map(returned_expression)
        .any(is_view_output)
}
