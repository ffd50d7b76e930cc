//! # layout-lint-ts
//!
//! Tree-sitter front-end for layout-lint.
//!
//! Parses `.tsx`, `.jsx`, `.ts` and `.js` sources and produces the flattened
//! component model from `layout-lint-core`:
//!
//! - [`TsxExtractor`] implements [`LanguageExtractor`]
//! - component detection (uppercase bound name, JSX returned from the body)
//! - statement flattening into the closed `StatementShape` variant
//! - bottom-up reachability from each component's returned output

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod detector;
mod flatten;
mod reach;
mod syntax;
mod tsx;

pub use layout_lint_core::LanguageExtractor;
pub use tsx::{Dialect, TsxExtractor};
