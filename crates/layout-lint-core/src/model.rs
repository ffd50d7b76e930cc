//! Flattened syntax model consumed by rules.
//!
//! Extractors turn a parsed syntax tree into these immutable records once per
//! file. Rules never see parser nodes: each component body is an ordered list
//! of [`Statement`]s tagged with a closed [`StatementShape`], plus the
//! precomputed set of names its returned output depends on.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// A byte range in the source with the position of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line of `start` (1-indexed).
    pub line: usize,
    /// Column of `start` (1-indexed).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for an empty range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the source text covered by this span.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// Left-hand side of a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `const name = ...`
    Identifier(String),
    /// `const { a, b } = ...`
    Object,
    /// `const [a, b] = ...`
    Array,
}

/// What a declaration is initialised with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingInit {
    /// The bare identifier `props`.
    Props,
    /// A call whose head name could be resolved.
    Call {
        /// Resolved callee name (`useQuery` for `api.useQuery(...).data`).
        head: String,
    },
    /// An arrow function or function expression.
    Function,
    /// Any other expression.
    Value,
    /// No initializer.
    Missing,
}

/// A variable declaration, described by its first declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Pattern of the first declarator.
    pub pattern: Pattern,
    /// Initializer of the first declarator.
    pub init: BindingInit,
    /// Every name bound by the whole declaration.
    pub names: Vec<String>,
}

/// Syntactic role of one top-level statement of a component body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementShape {
    /// `return ...`
    Return,
    /// `if (...) ...`
    Conditional {
        /// Whether the taken branch contains a return statement.
        exits: bool,
    },
    /// A bare expression statement.
    Expression {
        /// Resolved head name when the expression is a call.
        call_head: Option<String>,
    },
    /// `function name() {}`
    FunctionDecl {
        /// Declared name.
        name: String,
    },
    /// `const/let/var ...`
    Binding(Binding),
    /// Anything else (loops, blocks, declarations without declarators, ...).
    Other,
}

/// One top-level statement of a component body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Flattened syntactic role.
    pub shape: StatementShape,
    /// Exact source range of the statement.
    pub span: Span,
}

impl Statement {
    /// Creates a new statement record.
    #[must_use]
    pub fn new(shape: StatementShape, span: Span) -> Self {
        Self { shape, span }
    }
}

/// Names referenced by a component's returned output.
///
/// Built bottom-up from the identifiers referenced in the component's return
/// expressions plus the identifiers those names' declarations reference,
/// exactly one binding level deep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewReach {
    names: HashSet<String>,
}

impl ViewReach {
    /// Builds the reach set.
    ///
    /// * `direct` - identifiers referenced inside the return expression(s)
    /// * `symbols` - top-level bound name to statement index
    /// * `statement_refs` - identifiers referenced by each statement, by index
    #[must_use]
    pub fn build(
        direct: HashSet<String>,
        symbols: &HashMap<String, usize>,
        statement_refs: &[Vec<String>],
    ) -> Self {
        let mut names = direct.clone();
        for name in &direct {
            let Some(&index) = symbols.get(name) else {
                continue;
            };
            if let Some(refs) = statement_refs.get(index) {
                names.extend(refs.iter().cloned());
            }
        }
        Self { names }
    }

    /// Creates a reach set from an explicit list of names.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is referenced by the returned output.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of reachable names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when nothing is reachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A detected component and its flattened body.
#[derive(Debug, Clone)]
pub struct Component {
    /// Bound name of the component.
    pub name: String,
    /// Span of the whole function node.
    pub span: Span,
    /// Top-level statements of the body in source order.
    pub statements: Vec<Statement>,
    /// Names reachable from the returned output.
    pub reach: ViewReach,
}

impl Component {
    /// Whether `name` is referenced, directly or through one binding, by the
    /// component's returned output.
    #[must_use]
    pub fn is_view_bound(&self, name: &str) -> bool {
        self.reach.contains(name)
    }
}

/// Result of extracting one source file.
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    /// Path relative to project root.
    pub file_path: PathBuf,
    /// Components found in the file, in source order.
    pub components: Vec<Component>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_text_and_len() {
        let span = Span::new(6, 11, 1, 7);
        assert_eq!(span.len(), 5);
        assert_eq!(span.text("const value = 1;"), Some("value"));
        assert!(!span.is_empty());
    }

    #[test]
    fn reach_follows_exactly_one_binding() {
        // const a = b; const view = a; return <div>{view}</div>
        let symbols: HashMap<String, usize> =
            [("a".to_string(), 0), ("view".to_string(), 1)].into();
        let refs = vec![vec!["b".to_string()], vec!["a".to_string()]];
        let direct: HashSet<String> = ["view".to_string()].into();

        let reach = ViewReach::build(direct, &symbols, &refs);
        assert!(reach.contains("view"));
        assert!(reach.contains("a"));
        assert!(!reach.contains("b"));
        assert_eq!(reach.len(), 2);
    }

    #[test]
    fn reach_ignores_unbound_names() {
        let reach = ViewReach::build(["props".to_string()].into(), &HashMap::new(), &[]);
        assert!(reach.contains("props"));
        assert_eq!(reach.len(), 1);
    }
}
