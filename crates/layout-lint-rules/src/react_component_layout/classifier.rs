//! Assigns a [`Category`] and display name to each component statement.

use layout_lint_core::{BindingInit, Component, Pattern, Span, Statement, StatementShape};

use super::category::Category;

/// Default priority accessors, matched by exact name.
pub const DEFAULT_PRIORITY_HOOKS: &[&str] =
    &["useLocation", "useTranslation", "useRouter", "useNavigate"];

/// Default handler name prefixes.
pub const DEFAULT_HANDLER_PREFIXES: &[&str] = &["handle", "on"];

const STATE_HOOKS: &[&str] = &["useState", "useReducer", "watch"];

const EFFECT_HOOKS: &[&str] = &[
    "useMemo",
    "useCallback",
    "useEffect",
    "useLayoutEffect",
    "useImperativeHandle",
];

/// A statement with its category and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Assigned category.
    pub category: Category,
    /// Name shown in messages (e.g. `useState`, `Handler (onSave)`).
    pub display_name: String,
    /// Source range of the statement.
    pub span: Span,
}

/// Maps statements to categories using name-based rules.
#[derive(Debug, Clone)]
pub struct Classifier {
    priority_hooks: Vec<String>,
    handler_prefixes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier with the default name lists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            priority_hooks: DEFAULT_PRIORITY_HOOKS.iter().map(|s| (*s).to_string()).collect(),
            handler_prefixes: DEFAULT_HANDLER_PREFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Replaces the priority accessor names.
    #[must_use]
    pub fn priority_hooks(mut self, names: Vec<String>) -> Self {
        self.priority_hooks = names;
        self
    }

    /// Replaces the handler name prefixes.
    #[must_use]
    pub fn handler_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.handler_prefixes = prefixes;
        self
    }

    /// Category of a call by its head name, or `None` for plain calls.
    #[must_use]
    pub fn hook_category(&self, name: &str) -> Option<Category> {
        if self.priority_hooks.iter().any(|h| h == name) {
            Some(Category::PriorityAccessor)
        } else if name.ends_with("Context") {
            Some(Category::ContextAccessor)
        } else if STATE_HOOKS.contains(&name) {
            Some(Category::StateDeclaration)
        } else if name.ends_with("Query") || name.ends_with("Mutation") {
            Some(Category::DataFetch)
        } else if EFFECT_HOOKS.contains(&name) {
            Some(Category::EffectRegistration)
        } else if name.starts_with("use") {
            Some(Category::DerivedHook)
        } else {
            None
        }
    }

    fn function_category(&self, name: &str) -> (Category, String) {
        if self.handler_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            (Category::EventHandler, format!("Handler ({name})"))
        } else {
            (Category::UtilityFunction, format!("Utility ({name})"))
        }
    }

    /// Classifies one statement of `component`.
    #[must_use]
    pub fn classify(&self, statement: &Statement, component: &Component) -> Classified {
        let (category, display_name) = self.categorize(&statement.shape, component);
        Classified {
            category,
            display_name,
            span: statement.span,
        }
    }

    /// Classifies every statement of `component` in source order.
    #[must_use]
    pub fn classify_all(&self, component: &Component) -> Vec<Classified> {
        component
            .statements
            .iter()
            .map(|s| self.classify(s, component))
            .collect()
    }

    fn categorize(&self, shape: &StatementShape, component: &Component) -> (Category, String) {
        match shape {
            StatementShape::Return => (Category::FinalOutput, "JSX Return".to_string()),
            StatementShape::Conditional { exits: true } => {
                (Category::EarlyExit, "Early Return".to_string())
            }
            StatementShape::Conditional { exits: false } => {
                (Category::Transparent, "If Statement".to_string())
            }
            StatementShape::Expression { call_head } => call_head
                .as_deref()
                .and_then(|head| self.hook_category(head).map(|c| (c, head.to_string())))
                .unwrap_or_else(|| (Category::Transparent, "Dependency/Side-Effect".to_string())),
            StatementShape::FunctionDecl { name } => self.function_category(name),
            StatementShape::Binding(binding) => {
                if binding.pattern == Pattern::Object && binding.init == BindingInit::Props {
                    return (Category::InputDestructure, "Props Destructuring".to_string());
                }
                if let BindingInit::Call { head } = &binding.init {
                    if let Some(category) = self.hook_category(head) {
                        return (category, head.clone());
                    }
                }
                if binding.init == BindingInit::Function {
                    let name = match &binding.pattern {
                        Pattern::Identifier(name) => name.as_str(),
                        Pattern::Object | Pattern::Array => "",
                    };
                    return self.function_category(name);
                }
                if binding.names.iter().any(|n| component.is_view_bound(n)) {
                    (Category::ViewValue, "View Value".to_string())
                } else {
                    (Category::Transparent, "Dependency Value".to_string())
                }
            }
            StatementShape::Other => (Category::Transparent, "Other Statement".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_lint_core::{Binding, ViewReach};

    fn component(view_bound: &[&str]) -> Component {
        Component {
            name: "C".to_string(),
            span: Span::default(),
            statements: Vec::new(),
            reach: ViewReach::from_names(view_bound.iter().copied()),
        }
    }

    fn binding(pattern: Pattern, init: BindingInit, names: &[&str]) -> StatementShape {
        StatementShape::Binding(Binding {
            pattern,
            init,
            names: names.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    fn call(head: &str) -> BindingInit {
        BindingInit::Call {
            head: head.to_string(),
        }
    }

    fn categorize(shape: StatementShape, view_bound: &[&str]) -> (Category, String) {
        Classifier::new().categorize(&shape, &component(view_bound))
    }

    #[test]
    fn hook_mapping() {
        let c = Classifier::new();
        assert_eq!(c.hook_category("useNavigate"), Some(Category::PriorityAccessor));
        assert_eq!(c.hook_category("useThemeContext"), Some(Category::ContextAccessor));
        assert_eq!(c.hook_category("useState"), Some(Category::StateDeclaration));
        assert_eq!(c.hook_category("watch"), Some(Category::StateDeclaration));
        assert_eq!(c.hook_category("useUsersQuery"), Some(Category::DataFetch));
        assert_eq!(c.hook_category("useMutation"), Some(Category::DataFetch));
        assert_eq!(c.hook_category("useCallback"), Some(Category::EffectRegistration));
        assert_eq!(c.hook_category("useForm"), Some(Category::DerivedHook));
        assert_eq!(c.hook_category("formatDate"), None);
        // Exact matches only for the fixed families
        assert_eq!(c.hook_category("useStateMachine"), Some(Category::DerivedHook));
        assert_eq!(c.hook_category("watchAll"), None);
    }

    #[test]
    fn suffix_rules_precede_prefix_rule() {
        let c = Classifier::new();
        // Context wins over the generic `use` prefix and over Query
        assert_eq!(c.hook_category("useQueryContext"), Some(Category::ContextAccessor));
        assert_eq!(c.hook_category("fetchQuery"), Some(Category::DataFetch));
    }

    #[test]
    fn configured_priority_hooks() {
        let c = Classifier::new().priority_hooks(vec!["useParams".to_string()]);
        assert_eq!(c.hook_category("useParams"), Some(Category::PriorityAccessor));
        assert_eq!(c.hook_category("useLocation"), Some(Category::DerivedHook));
    }

    #[test]
    fn returns_and_conditionals() {
        assert_eq!(
            categorize(StatementShape::Return, &[]),
            (Category::FinalOutput, "JSX Return".to_string())
        );
        assert_eq!(
            categorize(StatementShape::Conditional { exits: true }, &[]).0,
            Category::EarlyExit
        );
        assert_eq!(
            categorize(StatementShape::Conditional { exits: false }, &[]).0,
            Category::Transparent
        );
    }

    #[test]
    fn bare_calls() {
        let shape = |head: Option<&str>| StatementShape::Expression {
            call_head: head.map(String::from),
        };
        assert_eq!(
            categorize(shape(Some("useEffect")), &[]),
            (Category::EffectRegistration, "useEffect".to_string())
        );
        assert_eq!(categorize(shape(Some("console")), &[]).0, Category::Transparent);
        assert_eq!(categorize(shape(None), &[]).0, Category::Transparent);
    }

    #[test]
    fn function_declarations_by_prefix() {
        let decl = |name: &str| StatementShape::FunctionDecl {
            name: name.to_string(),
        };
        assert_eq!(
            categorize(decl("handleSubmit"), &[]),
            (Category::EventHandler, "Handler (handleSubmit)".to_string())
        );
        assert_eq!(categorize(decl("onClose"), &[]).0, Category::EventHandler);
        assert_eq!(
            categorize(decl("formatDate"), &[]),
            (Category::UtilityFunction, "Utility (formatDate)".to_string())
        );
    }

    #[test]
    fn bindings() {
        let props = binding(Pattern::Object, BindingInit::Props, &["a"]);
        assert_eq!(categorize(props, &[]).0, Category::InputDestructure);

        // `const p = props` is a plain value
        let alias = binding(Pattern::Identifier("p".into()), BindingInit::Props, &["p"]);
        assert_eq!(categorize(alias, &[]).0, Category::Transparent);

        let state = binding(Pattern::Array, call("useState"), &["a", "setA"]);
        assert_eq!(
            categorize(state, &[]),
            (Category::StateDeclaration, "useState".to_string())
        );

        let handler = binding(Pattern::Identifier("onSave".into()), BindingInit::Function, &["onSave"]);
        assert_eq!(
            categorize(handler, &[]),
            (Category::EventHandler, "Handler (onSave)".to_string())
        );

        let anonymous = binding(Pattern::Object, BindingInit::Function, &[]);
        assert_eq!(
            categorize(anonymous, &[]),
            (Category::UtilityFunction, "Utility ()".to_string())
        );
    }

    #[test]
    fn view_values_and_dependency_values() {
        let computed = || {
            binding(
                Pattern::Identifier("label".into()),
                call("formatUser"),
                &["label"],
            )
        };
        assert_eq!(
            categorize(computed(), &["label"]),
            (Category::ViewValue, "View Value".to_string())
        );
        assert_eq!(
            categorize(computed(), &[]),
            (Category::Transparent, "Dependency Value".to_string())
        );

        let destructured = binding(Pattern::Object, BindingInit::Value, &["a", "b"]);
        assert_eq!(categorize(destructured, &["b"]).0, Category::ViewValue);
    }

    #[test]
    fn other_statements_are_transparent() {
        assert_eq!(
            categorize(StatementShape::Other, &[]).0,
            Category::Transparent
        );
    }

    #[test]
    fn classify_keeps_span() {
        let span = Span::new(10, 20, 2, 3);
        let statement = Statement::new(StatementShape::Return, span);
        let classified = Classifier::new().classify(&statement, &component(&[]));
        assert_eq!(classified.span, span);
        assert_eq!(classified.category, Category::FinalOutput);
    }
}
