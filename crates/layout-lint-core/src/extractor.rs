//! Language front-end extension point.
//!
//! `LanguageExtractor` is implemented by parser-backed crates. It turns raw
//! source text into the flattened [`FileAnalysis`] model that rules consume.

use crate::model::FileAnalysis;

/// Errors raised while turning source text into the syntax model.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The parser rejected the grammar.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Parser error detail.
        message: String,
    },

    /// The parser produced no tree.
    #[error("parser produced no syntax tree")]
    NoTree,

    /// The source contains syntax errors.
    #[error("syntax error at {line}:{column}")]
    Syntax {
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error (1-indexed).
        column: usize,
    },
}

/// Trait for language-specific extraction.
///
/// Implementations must be pure: the same source always yields the same
/// analysis, and no state is kept between calls.
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"tsx"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".tsx", ".jsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts components from source code.
    ///
    /// `extension` is the file extension including the dot, used to pick a
    /// grammar dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed.
    fn analyze(&self, source: &str, extension: &str) -> Result<FileAnalysis, ExtractError>;

    /// Whether this extractor handles files with `extension` (including the dot).
    fn handles(&self, extension: &str) -> bool {
        self.extensions().contains(&extension)
    }
}

/// Type alias for boxed extractor trait objects.
pub type ExtractorBox = Box<dyn LanguageExtractor>;
