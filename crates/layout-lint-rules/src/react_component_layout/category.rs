//! Layout categories in their expected order.

use std::fmt;

/// Position bucket of one component statement.
///
/// Ranks increase in declaration order. `Transparent` statements are
/// invisible to ordering and carry rank -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Dependency values, bare side-effect calls, unrecognized forms.
    Transparent,
    /// `const { a } = props`
    InputDestructure,
    /// Router, navigation and translation accessors.
    PriorityAccessor,
    /// `use...Context()`
    ContextAccessor,
    /// `useState`, `useReducer`, `watch`
    StateDeclaration,
    /// `use...Query()`, `use...Mutation()`
    DataFetch,
    /// Any other `use...()` hook.
    DerivedHook,
    /// `useMemo`, `useCallback`, `useEffect`, ...
    EffectRegistration,
    /// Local helper functions.
    UtilityFunction,
    /// `handle...` / `on...` functions.
    EventHandler,
    /// Values referenced by the returned output.
    ViewValue,
    /// `if (...) return ...`
    EarlyExit,
    /// The final `return`.
    FinalOutput,
}

impl Category {
    /// Every ranked category, in order.
    pub const RANKED: [Self; 12] = [
        Self::InputDestructure,
        Self::PriorityAccessor,
        Self::ContextAccessor,
        Self::StateDeclaration,
        Self::DataFetch,
        Self::DerivedHook,
        Self::EffectRegistration,
        Self::UtilityFunction,
        Self::EventHandler,
        Self::ViewValue,
        Self::EarlyExit,
        Self::FinalOutput,
    ];

    /// Numeric rank, `-1` for [`Category::Transparent`].
    #[must_use]
    pub fn rank(self) -> i8 {
        match self {
            Self::Transparent => -1,
            Self::InputDestructure => 0,
            Self::PriorityAccessor => 1,
            Self::ContextAccessor => 2,
            Self::StateDeclaration => 3,
            Self::DataFetch => 4,
            Self::DerivedHook => 5,
            Self::EffectRegistration => 6,
            Self::UtilityFunction => 7,
            Self::EventHandler => 8,
            Self::ViewValue => 9,
            Self::EarlyExit => 10,
            Self::FinalOutput => 11,
        }
    }

    /// Group display name used in messages.
    #[must_use]
    pub fn group_name(self) -> &'static str {
        match self {
            Self::Transparent => "Transparent",
            Self::InputDestructure => "Props Destructuring",
            Self::PriorityAccessor => "Priority Hooks",
            Self::ContextAccessor => "Context Hooks",
            Self::StateDeclaration => "State Hooks",
            Self::DataFetch => "Query Hooks",
            Self::DerivedHook => "Custom Hooks",
            Self::EffectRegistration => "Effect Hooks",
            Self::UtilityFunction => "Utility Functions",
            Self::EventHandler => "Event Handlers",
            Self::ViewValue => "View Values",
            Self::EarlyExit => "Early Returns",
            Self::FinalOutput => "JSX Return",
        }
    }

    /// Whether the ordering pass ignores this category.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self == Self::Transparent
    }

    /// Categories that must form one unbroken run once started.
    #[must_use]
    pub fn requires_contiguity(self) -> bool {
        matches!(
            self,
            Self::StateDeclaration | Self::UtilityFunction | Self::EventHandler
        )
    }

    /// View values and early exits may appear in either order.
    #[must_use]
    pub fn interchangeable_with(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::ViewValue, Self::EarlyExit) | (Self::EarlyExit, Self::ViewValue)
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}
