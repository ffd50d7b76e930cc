//! TSX/JSX/TypeScript/JavaScript extractor using Tree-sitter.

use layout_lint_core::{Component, ExtractError, FileAnalysis, LanguageExtractor, ViewReach};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::detector::component_name;
use crate::flatten::flatten_statement;
use crate::reach::view_reach;
use crate::syntax::{named_children, span};

/// Grammar dialect picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// TypeScript with JSX (`.tsx`).
    Tsx,
    /// Plain TypeScript (`.ts`, `.mts`, `.cts`).
    TypeScript,
    /// JavaScript with JSX (`.js`, `.jsx`, `.mjs`, `.cjs`).
    JavaScript,
}

impl Dialect {
    /// Dialect for a dotted extension, if supported.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".tsx" => Some(Self::Tsx),
            ".ts" | ".mts" | ".cts" => Some(Self::TypeScript),
            ".js" | ".jsx" | ".mjs" | ".cjs" => Some(Self::JavaScript),
            _ => None,
        }
    }

    fn language(self) -> Language {
        match self {
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Tsx => "tsx",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
        }
    }
}

/// Extracts React components and their flattened bodies.
///
/// Every function-like node in the file is a candidate, including functions
/// nested in other functions; each detected component is flattened
/// independently.
#[derive(Debug, Default, Clone, Copy)]
pub struct TsxExtractor;

impl TsxExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn parser(dialect: Dialect) -> Result<Parser, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&dialect.language())
            .map_err(|e| ExtractError::Language {
                language: dialect.name(),
                message: e.to_string(),
            })?;
        Ok(parser)
    }

    fn first_error(root: Node<'_>) -> Option<Node<'_>> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                return Some(node);
            }
            if node.has_error() {
                let mut cursor = node.walk();
                let children: Vec<_> = node.children(&mut cursor).collect();
                stack.extend(children.into_iter().rev());
            }
        }
        None
    }

    fn extract_component(node: Node<'_>, name: String, src: &[u8]) -> Component {
        let mut statements = Vec::new();
        let mut statement_nodes = Vec::new();

        let body = node.child_by_field_name("body");
        if let Some(block) = body.filter(|b| b.kind() == "statement_block") {
            for child in named_children(block) {
                if let Some(statement) = flatten_statement(child, src) {
                    statements.push(statement);
                    statement_nodes.push(child);
                }
            }
        }

        let reach = body.map_or_else(ViewReach::default, |b| {
            view_reach(b, &statement_nodes, src)
        });

        debug!(
            "component {} at line {}: {} statement(s), {} view-bound name(s)",
            name,
            node.start_position().row + 1,
            statements.len(),
            reach.len()
        );

        Component {
            name,
            span: span(node),
            statements,
            reach,
        }
    }
}

impl LanguageExtractor for TsxExtractor {
    fn language_id(&self) -> &'static str {
        "tsx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".tsx", ".jsx", ".ts", ".js", ".mts", ".cts", ".mjs", ".cjs"]
    }

    fn analyze(&self, source: &str, extension: &str) -> Result<FileAnalysis, ExtractError> {
        let dialect = Dialect::from_extension(extension).unwrap_or(Dialect::Tsx);
        let mut parser = Self::parser(dialect)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ExtractError::NoTree)?;
        let root = tree.root_node();

        if root.has_error() {
            let pos = Self::first_error(root)
                .map_or(root.start_position(), |n| n.start_position());
            return Err(ExtractError::Syntax {
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }

        let mut components = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(name) = component_name(node, src) {
                components.push(Self::extract_component(node, name, src));
            }
            stack.extend(named_children(node).into_iter().rev());
        }
        components.sort_by_key(|c| c.span.start);

        Ok(FileAnalysis {
            components,
            ..FileAnalysis::default()
        })
    }
}
