//! Single forward pass over classified statements.

use std::collections::HashSet;

use super::category::Category;
use super::classifier::Classified;

/// Kind of layout diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// A statement ranks below the high-water mark.
    Order,
    /// A contiguous category was re-entered after another category.
    Contiguity,
}

impl LayoutKind {
    /// Message identifier (`order` / `contiguous`).
    #[must_use]
    pub fn message_id(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Contiguity => "contiguous",
        }
    }
}

/// One layout diagnostic, referring to statements by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDiagnostic {
    /// Diagnostic kind.
    pub kind: LayoutKind,
    /// Index of the offending statement.
    pub index: usize,
    /// Index of the statement holding the high-water mark (order only).
    pub anchor: Option<usize>,
}

/// Mutable scan state, local to one component.
#[derive(Debug, Default)]
struct ValidatorState {
    high_water: Option<(Category, usize)>,
    seen: HashSet<Category>,
    previous: Option<Category>,
}

/// Validates the category sequence of one component.
///
/// Transparent statements are skipped and reset the contiguity run.
/// Contiguity is checked before order, and both may fire on the same
/// statement.
#[must_use]
pub fn validate(statements: &[Classified]) -> Vec<LayoutDiagnostic> {
    let mut state = ValidatorState::default();
    let mut diagnostics = Vec::new();

    for (index, statement) in statements.iter().enumerate() {
        let category = statement.category;
        if category.is_transparent() {
            state.previous = None;
            continue;
        }

        if category.requires_contiguity()
            && state.seen.contains(&category)
            && state.previous != Some(category)
        {
            diagnostics.push(LayoutDiagnostic {
                kind: LayoutKind::Contiguity,
                index,
                anchor: None,
            });
        }

        match state.high_water {
            Some((mark, _)) if category.interchangeable_with(mark) => {}
            Some((mark, anchor)) if category < mark => {
                diagnostics.push(LayoutDiagnostic {
                    kind: LayoutKind::Order,
                    index,
                    anchor: Some(anchor),
                });
            }
            Some((mark, _)) if category == mark => {}
            _ => state.high_water = Some((category, index)),
        }

        state.seen.insert(category);
        state.previous = Some(category);
    }

    diagnostics
}
