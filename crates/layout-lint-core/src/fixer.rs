//! Applies automatic fixes carried by violations.

use crate::types::{Fix, TextEdit, Violation};
use tracing::debug;

/// Result of applying fixes to one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// Rewritten source.
    pub output: String,
    /// Number of fixes applied.
    pub applied: usize,
    /// Number of fixes skipped because they overlap an applied one.
    pub skipped: usize,
}

impl FixOutcome {
    /// Whether the output differs from the input.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Applies every non-overlapping fix in `violations` to `source`.
///
/// Fixes are taken in order of their start offset. A fix whose byte range
/// touches or overlaps a fix already taken is skipped; running the linter
/// again on the output picks it up.
#[must_use]
pub fn apply_fixes(source: &str, violations: &[Violation]) -> FixOutcome {
    let mut fixes: Vec<(&Fix, (usize, usize))> = violations
        .iter()
        .filter_map(Violation::fix)
        .filter_map(|fix| fix.range().map(|range| (fix, range)))
        .collect();
    fixes.sort_by_key(|(_, (start, end))| (*start, *end));

    let mut edits: Vec<TextEdit> = Vec::new();
    let mut taken_until: Option<usize> = None;
    let mut applied = 0;
    let mut skipped = 0;

    for (fix, (start, end)) in fixes {
        if taken_until.is_some_and(|until| start <= until) {
            debug!("Skipping overlapping fix at {start}..{end}: {}", fix.message);
            skipped += 1;
            continue;
        }
        edits.extend(fix.edits.iter().cloned());
        taken_until = Some(end);
        applied += 1;
    }

    let output = Fix::with_edits("combined", edits).apply(source);
    FixOutcome {
        output,
        applied,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity, Suggestion};
    use std::path::PathBuf;

    fn violation_with(fix: Option<Fix>) -> Violation {
        let v = Violation::new(
            "LL001",
            "react-component-layout",
            Severity::Error,
            Location::new(PathBuf::from("App.tsx"), 1, 1),
            "msg",
        );
        match fix {
            Some(fix) => v.with_suggestion(Suggestion::with_fix("move", fix)),
            None => v,
        }
    }

    fn relocate(anchor: usize, start: usize, end: usize, text: &str) -> Fix {
        Fix::with_edits(
            "move",
            vec![TextEdit::insert(anchor, text), TextEdit::delete(start, end)],
        )
    }

    #[test]
    fn test_no_fixes() {
        let outcome = apply_fixes("abc", &[violation_with(None)]);
        assert_eq!(outcome.output, "abc");
        assert!(!outcome.changed());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_relocation() {
        let source = "a;\nb;\n";
        let outcome = apply_fixes(source, &[violation_with(Some(relocate(0, 3, 6, "b;\n")))]);
        assert_eq!(outcome.output, "b;\na;\n");
        assert_eq!(outcome.applied, 1);
    }

    #[test]
    fn test_disjoint_fixes_applied_together() {
        let source = "a;\nb;\nc;\nd;\n";
        let outcome = apply_fixes(
            source,
            &[
                violation_with(Some(relocate(6, 9, 12, "d;\n"))),
                violation_with(Some(relocate(0, 3, 5, "b;\n"))),
            ],
        );
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.output, "b;\na;\n\nd;\nc;\n");
    }

    #[test]
    fn test_overlapping_fix_skipped() {
        let source = "a;\nb;\nc;\n";
        let outcome = apply_fixes(
            source,
            &[
                violation_with(Some(relocate(0, 3, 6, "b;\n"))),
                violation_with(Some(relocate(0, 6, 9, "c;\n"))),
            ],
        );
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.output, "b;\na;\nc;\n");
    }
}
