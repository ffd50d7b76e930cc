//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Contains metadata about the file being analyzed that rules can use
/// to make context-aware decisions (e.g., skip checks in test files), and the
/// raw source text for building fixes.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file is detected as a test file.
    pub is_test: bool,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let is_test = Self::detect_test_file(path);
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            is_test,
            relative_path,
        }
    }

    /// Detects if a file is a test file based on path conventions.
    fn detect_test_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "__tests__" || s == "__mocks__" || s == "tests" || s == "test" {
                    return true;
                }
            }
        }

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            let stem = file_name.split('.').collect::<Vec<_>>();
            if stem.len() >= 3 {
                let marker = stem[stem.len() - 2];
                if marker == "test" || marker == "spec" || marker == "stories" {
                    return true;
                }
            }
        }

        false
    }

    /// Byte offset of the start of the line containing `offset`.
    #[must_use]
    pub fn line_start(&self, offset: usize) -> usize {
        let offset = offset.min(self.content.len());
        self.content[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    /// Byte offset just past the line break ending the line containing
    /// `offset`, or the end of the content on the last line.
    #[must_use]
    pub fn line_end_inclusive(&self, offset: usize) -> usize {
        let offset = offset.min(self.content.len());
        self.content[offset..]
            .find('\n')
            .map_or(self.content.len(), |i| offset + i + 1)
    }

    /// Leading whitespace of the line containing `offset`.
    #[must_use]
    pub fn indentation_at(&self, offset: usize) -> &'a str {
        let start = self.line_start(offset);
        let line = &self.content[start..];
        let width = line
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(line.len());
        &line[..width]
    }
}
