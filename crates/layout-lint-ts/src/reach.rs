//! Bottom-up reachability from a component's returned output.
//!
//! Computed once per component before any classification: the identifiers
//! referenced by its return expressions, a symbol table of top-level
//! declarations, and the identifiers each declaration references.

use std::collections::{HashMap, HashSet};

use layout_lint_core::ViewReach;
use tree_sitter::Node;

use crate::flatten::{bound_names, declarators};
use crate::syntax::{is_function, is_type_only, named_children, returned_expression, text};

/// Collects identifier references below `node`, in source order.
///
/// Property names are not references; shorthand properties (`{ a }`) are.
/// Type annotations are skipped.
pub(crate) fn collect_refs(node: Node<'_>, src: &[u8], out: &mut Vec<String>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match node.kind() {
            "identifier" | "shorthand_property_identifier" => {
                out.push(text(node, src).to_owned());
            }
            _ if is_type_only(node) => {}
            _ => stack.extend(named_children(node).into_iter().rev()),
        }
    }
}

/// Identifiers referenced by the component's own return statements, at any
/// depth of its body but outside nested functions.
fn direct_refs(body: Node<'_>, src: &[u8]) -> HashSet<String> {
    let mut refs = Vec::new();
    if body.kind() == "statement_block" {
        let mut stack = vec![body];
        while let Some(node) = stack.pop() {
            for child in named_children(node) {
                if is_function(child) {
                    continue;
                }
                if child.kind() == "return_statement" {
                    if let Some(expr) = returned_expression(child) {
                        collect_refs(expr, src, &mut refs);
                    }
                } else {
                    stack.push(child);
                }
            }
        }
    } else {
        collect_refs(body, src, &mut refs);
    }
    refs.into_iter().collect()
}

/// Names bound by one top-level statement and the identifiers its value
/// initializers reference.
///
/// Function literals and function declarations bind names but contribute no
/// references: what a handler or helper uses is not part of the output.
fn declaration_refs(node: Node<'_>, src: &[u8]) -> (Vec<String>, Vec<String>) {
    let mut names = Vec::new();
    let mut refs = Vec::new();
    match node.kind() {
        "lexical_declaration" | "variable_declaration" => {
            for declarator in declarators(node) {
                if let Some(target) = declarator.child_by_field_name("name") {
                    bound_names(target, src, &mut names);
                }
                if let Some(value) = declarator.child_by_field_name("value") {
                    if !is_function(value) {
                        collect_refs(value, src, &mut refs);
                    }
                }
            }
        }
        "function_declaration" | "generator_function_declaration" => {
            if let Some(name) = node.child_by_field_name("name") {
                names.push(text(name, src).to_owned());
            }
        }
        _ => {}
    }
    (names, refs)
}

/// Builds the reach set of a component.
///
/// `statements` are the nodes that became flattened statements, in order;
/// their indices key the symbol table.
pub(crate) fn view_reach(body: Node<'_>, statements: &[Node<'_>], src: &[u8]) -> ViewReach {
    let direct = direct_refs(body, src);

    let mut symbols: HashMap<String, usize> = HashMap::new();
    let mut statement_refs = Vec::with_capacity(statements.len());
    for (index, node) in statements.iter().enumerate() {
        let (names, refs) = declaration_refs(*node, src);
        for name in names {
            symbols.entry(name).or_insert(index);
        }
        statement_refs.push(refs);
    }

    ViewReach::build(direct, &symbols, &statement_refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn reach_of(source: &str) -> ViewReach {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        let mut stack = vec![tree.root_node()];
        let mut func = None;
        while let Some(node) = stack.pop() {
            if is_function(node) {
                func = Some(node);
                break;
            }
            stack.extend(named_children(node).into_iter().rev());
        }
        let func = func.unwrap();
        let body = func.child_by_field_name("body").unwrap();
        let statements = if body.kind() == "statement_block" {
            named_children(body)
        } else {
            Vec::new()
        };
        view_reach(body, &statements, source.as_bytes())
    }

    #[test]
    fn direct_references_from_return() {
        let reach = reach_of(
            "function C() { const label = 'x'; const unused = 1; return <div title={label} />; }",
        );
        assert!(reach.contains("label"));
        assert!(!reach.contains("unused"));
    }

    #[test]
    fn one_intermediate_binding_only() {
        let reach = reach_of(
            r"function C() {
  const base = 2;
  const doubled = base * 2;
  const view = doubled + 1;
  return <span>{view}</span>;
}",
        );
        assert!(reach.contains("view"));
        assert!(reach.contains("doubled"));
        assert!(!reach.contains("base"));
    }

    #[test]
    fn returns_inside_conditionals_count() {
        let reach = reach_of(
            r"function C() {
  const fallback = <Spinner />;
  if (loading) { return fallback; }
  return <div />;
}",
        );
        assert!(reach.contains("fallback"));
    }

    #[test]
    fn returns_of_nested_functions_do_not_count() {
        let reach = reach_of(
            r"function C() {
  const secret = 1;
  const handle = () => { return secret; };
  return <div />;
}",
        );
        assert!(!reach.contains("secret"));
    }

    #[test]
    fn property_names_are_not_references() {
        let reach = reach_of(
            r"function C() {
  const title = 'a';
  const obj = { b: 1 };
  return <div>{obj.title}{ { title } }</div>;
}",
        );
        assert!(reach.contains("obj"));
        assert!(reach.contains("title"));
        assert!(!reach.contains("b"));
    }

    #[test]
    fn function_declarations_are_not_expanded() {
        let reach = reach_of(
            r"function C() {
  const prefix = '>';
  function renderRow(row) { return prefix + row; }
  return <ul>{rows.map(renderRow)}</ul>;
}",
        );
        assert!(reach.contains("renderRow"));
        assert!(!reach.contains("prefix"));
    }

    #[test]
    fn values_used_only_by_handlers_stay_out() {
        let reach = reach_of(
            r"function C() {
  const [name, setName] = useState('');
  const payload = { name };
  const handleSubmit = () => save(payload);
  const factor = rate * 2;
  const format = function () { return (amount * factor).toFixed(2); };
  return <button onClick={handleSubmit}>{format()}</button>;
}",
        );
        assert!(reach.contains("handleSubmit"));
        assert!(reach.contains("format"));
        assert!(!reach.contains("payload"));
        assert!(!reach.contains("factor"));
    }

    #[test]
    fn deep_expressions_do_not_recurse() {
        let chain = vec!["a"; 20_000].join(" + ");
        let source = format!("function C() {{ const sum = {chain}; return <b>{{sum}}</b>; }}");
        let reach = reach_of(&source);
        assert!(reach.contains("sum"));
        assert!(reach.contains("a"));
    }

    #[test]
    fn expression_bodies_are_direct() {
        let reach = reach_of("const C = ({ title }) => <h1>{title}</h1>;");
        assert!(reach.contains("title"));
        assert!(!reach.contains("C"));
    }
}
