//! Flattens component body statements into [`StatementShape`]s.

use layout_lint_core::{Binding, BindingInit, Pattern, Statement, StatementShape};
use tree_sitter::Node;

use crate::syntax::{first_named, named_children, span, text};

/// Flattens one direct child of a component's `statement_block`.
///
/// Returns `None` for nodes that are not statements (comments, stray `;`).
pub(crate) fn flatten_statement(node: Node<'_>, src: &[u8]) -> Option<Statement> {
    let shape = match node.kind() {
        "comment" | "empty_statement" => return None,
        "return_statement" => StatementShape::Return,
        "if_statement" => StatementShape::Conditional {
            exits: conditional_exits(node),
        },
        "expression_statement" => StatementShape::Expression {
            call_head: first_named(node).and_then(|e| call_head(e, src)),
        },
        "function_declaration" | "generator_function_declaration" => node
            .child_by_field_name("name")
            .map_or(StatementShape::Other, |name| StatementShape::FunctionDecl {
                name: text(name, src).to_owned(),
            }),
        "lexical_declaration" | "variable_declaration" => flatten_declaration(node, src),
        _ => StatementShape::Other,
    };
    Some(Statement::new(shape, span(node)))
}

/// Whether the consequence of an `if` is, or directly contains, a return.
fn conditional_exits(node: Node<'_>) -> bool {
    let Some(consequence) = node.child_by_field_name("consequence") else {
        return false;
    };
    match consequence.kind() {
        "return_statement" => true,
        "statement_block" => named_children(consequence)
            .iter()
            .any(|s| s.kind() == "return_statement"),
        _ => false,
    }
}

/// Declarators of a `lexical_declaration` or `variable_declaration`.
pub(crate) fn declarators(node: Node<'_>) -> Vec<Node<'_>> {
    named_children(node)
        .into_iter()
        .filter(|c| c.kind() == "variable_declarator")
        .collect()
}

fn flatten_declaration(node: Node<'_>, src: &[u8]) -> StatementShape {
    let declarators = declarators(node);
    let Some(first) = declarators.first() else {
        return StatementShape::Other;
    };
    let Some(target) = first.child_by_field_name("name") else {
        return StatementShape::Other;
    };

    let pattern = match target.kind() {
        "identifier" => Pattern::Identifier(text(target, src).to_owned()),
        "object_pattern" => Pattern::Object,
        "array_pattern" => Pattern::Array,
        _ => return StatementShape::Other,
    };

    let init = first
        .child_by_field_name("value")
        .map_or(BindingInit::Missing, |value| binding_init(value, src));

    let mut names = Vec::new();
    for declarator in &declarators {
        if let Some(target) = declarator.child_by_field_name("name") {
            bound_names(target, src, &mut names);
        }
    }

    StatementShape::Binding(Binding {
        pattern,
        init,
        names,
    })
}

fn binding_init(value: Node<'_>, src: &[u8]) -> BindingInit {
    if value.kind() == "identifier" && text(value, src) == "props" {
        return BindingInit::Props;
    }
    if let Some(head) = call_head(value, src) {
        return BindingInit::Call { head };
    }
    match value.kind() {
        "arrow_function" | "function_expression" | "function" => BindingInit::Function,
        _ => BindingInit::Value,
    }
}

/// Resolves the head name of a call expression.
///
/// `useX()`, `api.useX()`, `useX().data`, `await useX()` and `(useX())`
/// all resolve to `useX`. Returns `None` when the expression is not a call
/// or the callee has no plain name.
pub(crate) fn call_head(node: Node<'_>, src: &[u8]) -> Option<String> {
    match node.kind() {
        "call_expression" => {
            let callee = node.child_by_field_name("function")?;
            match callee.kind() {
                "identifier" => Some(text(callee, src).to_owned()),
                "member_expression" => {
                    let property = callee.child_by_field_name("property")?;
                    (property.kind() == "property_identifier")
                        .then(|| text(property, src).to_owned())
                }
                _ => None,
            }
        }
        "member_expression" => call_head(node.child_by_field_name("object")?, src),
        "await_expression" | "parenthesized_expression" => call_head(first_named(node)?, src),
        _ => None,
    }
}

/// Collects every identifier bound by a declaration pattern, in source order.
pub(crate) fn bound_names(node: Node<'_>, src: &[u8], out: &mut Vec<String>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match node.kind() {
            "identifier" | "shorthand_property_identifier_pattern" => {
                out.push(text(node, src).to_owned());
            }
            "pair_pattern" => stack.extend(node.child_by_field_name("value")),
            "assignment_pattern" | "object_assignment_pattern" => {
                stack.extend(node.child_by_field_name("left"));
            }
            "object_pattern" | "array_pattern" | "rest_pattern" => {
                stack.extend(named_children(node).into_iter().rev());
            }
            _ => {}
        }
    }
}
