//! Rules: the atomic units a schema is built from.
//!
//! A [`Rule`] bundles a predicate with the metadata the evaluator needs: the
//! expected type labels, whether `null` is accepted, whether the value is
//! required, and (for shape and container rules) the nested rules to recurse
//! into. Rules are immutable and cheap to clone; the required variant returned
//! by [`Rule::required`] shares everything with its base rule.
//!
//! # Examples
//!
//! ```rust
//! use prop_validator::rule::{Evaluation, Rule, WalkState, ParentContext};
//! use prop_validator::value::Value;
//!
//! let even = Rule::new(
//!     |value: &Value, _: &Evaluation<'_>| {
//!         Ok(value.as_f64().is_some_and(|n| n % 2.0 == 0.0))
//!     },
//!     "number: even",
//! );
//!
//! let state = WalkState::default();
//! let parent = ParentContext::default();
//! let result = even.evaluate(&Value::from(3), &Evaluation::root(&state, &parent));
//! assert!(!result.is_valid);
//! assert_eq!(result.message.as_deref(), Some("Property '' should be type 'number: even'"));
//! ```

pub mod message;


use crate::error::{Exception, PredicateError};
use crate::path::{PathSegment, join_object_path};
use crate::report::PropResult;
use crate::schema::Fields;
use crate::value::{Value, type_of};
use log::debug;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Label appended to the expected types of nullable, non-required rules.
pub const NULL_LABEL: &str = "null";

/// Signature shared by all rule predicates.
pub type Predicate = dyn Fn(&Value, &Evaluation<'_>) -> Result<bool, PredicateError> + Send + Sync;

/// Expected type labels of a rule, either fixed or computed on every evaluation.
#[derive(Clone)]
pub enum ExpectedTypes {
    Static(Vec<String>),
    Lazy(Arc<dyn Fn() -> Vec<String> + Send + Sync>),
}

impl ExpectedTypes {
    /// Labels computed each time they are requested
    pub fn lazy<F>(labels: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(labels))
    }

    pub fn resolve(&self) -> Vec<String> {
        match self {
            Self::Static(labels) => labels.clone(),
            Self::Lazy(labels) => labels(),
        }
    }
}

impl fmt::Debug for ExpectedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExpectedTypes").field(&self.resolve()).finish()
    }
}

impl From<&str> for ExpectedTypes {
    fn from(label: &str) -> Self {
        Self::Static(vec![label.to_string()])
    }
}

impl From<String> for ExpectedTypes {
    fn from(label: String) -> Self {
        Self::Static(vec![label])
    }
}

impl From<Vec<String>> for ExpectedTypes {
    fn from(labels: Vec<String>) -> Self {
        Self::Static(labels)
    }
}

impl From<Vec<&str>> for ExpectedTypes {
    fn from(labels: Vec<&str>) -> Self {
        Self::Static(labels.into_iter().map(str::to_string).collect())
    }
}

/// Position of the evaluator in the data tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkState {
    /// Path of the container holding the value being evaluated
    pub parent_path: Vec<PathSegment>,
    /// Whether superfluous keys are rejected at this level
    pub exact: bool,
}

impl WalkState {
    pub fn new(parent_path: Vec<PathSegment>, exact: bool) -> Self {
        Self { parent_path, exact }
    }
}

/// Information a caller passes down to a single rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentContext {
    /// Overrides the rule's own labels when non-empty
    pub expected_types: Vec<String>,
    /// The value is missing but required
    pub value_should_be_defined: bool,
    /// The value is present but not part of an exact schema
    pub value_should_not_be_defined: bool,
}

/// Everything a predicate may look at besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation<'a> {
    /// Property name or index of the value; `None` at the root
    pub key: Option<&'a PathSegment>,
    /// The object or array holding the value
    pub container: Option<&'a Value>,
    pub state: &'a WalkState,
    pub parent: &'a ParentContext,
}

impl<'a> Evaluation<'a> {
    pub fn new(
        key: Option<&'a PathSegment>,
        container: Option<&'a Value>,
        state: &'a WalkState,
        parent: &'a ParentContext,
    ) -> Self {
        Self {
            key,
            container,
            state,
            parent,
        }
    }

    /// Evaluation of an un-keyed value
    pub fn root(state: &'a WalkState, parent: &'a ParentContext) -> Self {
        Self::new(None, None, state, parent)
    }

    /// Reads a sibling property from the container; missing ones are `Undefined`
    pub fn sibling(&self, key: &str) -> Option<&'a Value> {
        self.container.map(|container| container.property(key))
    }
}

/// Kind of container a member rule iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

impl ContainerKind {
    /// Label prefix used in expected types, e.g. `Array<string>`
    pub fn label(self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }
}

/// Nested rules the evaluator recurses into.
#[derive(Debug, Clone)]
pub enum Nested {
    /// A field mapping applied to the whole value
    Shape { fields: Fields, exact: bool },
    /// Applies `inner` to every member of an array or object
    Members {
        container: ContainerKind,
        inner: Box<Nested>,
    },
}

impl Nested {
    /// The field mapping at the bottom of this chain
    pub fn fields(&self) -> &Fields {
        match self {
            Self::Shape { fields, .. } => fields,
            Self::Members { inner, .. } => inner.fields(),
        }
    }

    pub fn is_exact(&self) -> bool {
        match self {
            Self::Shape { exact, .. } => *exact,
            Self::Members { inner, .. } => inner.is_exact(),
        }
    }
}

struct RuleCore {
    predicate: Box<Predicate>,
    expected: ExpectedTypes,
    nullable: bool,
    always_required: bool,
    nested: Option<Nested>,
    member: Option<ContainerKind>,
}

/// A validator unit: predicate plus metadata.
#[derive(Clone)]
pub struct Rule {
    core: Arc<RuleCore>,
    required: bool,
}

/// Builds a rule from a predicate and its expected type labels.
///
/// `nullable` lets an explicit `null` pass without running the predicate when
/// the rule is not required. `always_required` makes the base rule behave like
/// its required variant.
pub fn make_rule<F>(
    predicate: F,
    expected: impl Into<ExpectedTypes>,
    nullable: bool,
    always_required: bool,
) -> Rule
where
    F: Fn(&Value, &Evaluation<'_>) -> Result<bool, PredicateError> + Send + Sync + 'static,
{
    Rule::from_parts(
        Box::new(predicate),
        expected.into(),
        nullable,
        always_required,
        None,
        None,
    )
}

impl Rule {
    /// A non-nullable, optional rule
    pub fn new<F>(predicate: F, expected: impl Into<ExpectedTypes>) -> Self
    where
        F: Fn(&Value, &Evaluation<'_>) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        make_rule(predicate, expected, false, false)
    }

    pub(crate) fn from_parts(
        predicate: Box<Predicate>,
        expected: ExpectedTypes,
        nullable: bool,
        always_required: bool,
        nested: Option<Nested>,
        member: Option<ContainerKind>,
    ) -> Self {
        Self {
            core: Arc::new(RuleCore {
                predicate,
                expected,
                nullable,
                always_required,
                nested,
                member,
            }),
            required: false,
        }
    }

    /// The required variant of this rule. A missing value fails it.
    pub fn required(&self) -> Rule {
        Rule {
            core: Arc::clone(&self.core),
            required: true,
        }
    }

    /// Whether a missing value fails this rule
    pub fn is_required(&self) -> bool {
        self.required || self.core.always_required
    }

    pub fn is_nullable(&self) -> bool {
        self.core.nullable
    }

    /// Expected type labels, resolved now
    pub fn expected_types(&self) -> Vec<String> {
        self.core.expected.resolve()
    }

    pub fn nested(&self) -> Option<&Nested> {
        self.core.nested.as_ref()
    }

    /// Field mapping the evaluator recurses into, if any
    pub fn nested_rules(&self) -> Option<&Fields> {
        self.nested().map(Nested::fields)
    }

    /// Whether the nested mapping rejects superfluous keys
    pub fn is_exact_nested(&self) -> bool {
        self.nested().is_some_and(Nested::is_exact)
    }

    /// True for `arrayOf` and `objectOf` rules
    pub fn is_member_rule(&self) -> bool {
        self.core.member.is_some()
    }

    /// Container a member rule iterates over
    pub fn member_container(&self) -> Option<ContainerKind> {
        self.core.member
    }

    /// Runs the rule and reports whether the value passed, without building a
    /// full result. Failures raised by the predicate are captured.
    pub fn check(&self, value: &Value, evaluation: &Evaluation<'_>) -> (bool, Option<Exception>) {
        let required = self.is_required();
        if value.is_undefined() {
            return (!required, None);
        }
        if value.is_null() && self.core.nullable && !required {
            return (true, None);
        }

        match catch_unwind(AssertUnwindSafe(|| (self.core.predicate)(value, evaluation))) {
            Ok(Ok(is_valid)) => (is_valid, None),
            Ok(Err(error)) => {
                let exception = Exception::from_error(error.as_ref());
                debug!("Predicate returned an error: {}", exception);
                (false, Some(exception))
            }
            Err(payload) => {
                let exception = Exception::from_panic(payload);
                debug!("Predicate panicked: {}", exception);
                (false, Some(exception))
            }
        }
    }

    /// Shorthand for `check(..).0`
    pub fn passes(&self, value: &Value, evaluation: &Evaluation<'_>) -> bool {
        self.check(value, evaluation).0
    }

    /// Evaluates the rule against a value and builds the full result.
    pub fn evaluate(&self, value: &Value, evaluation: &Evaluation<'_>) -> PropResult {
        let is_required = self.is_required();

        let mut object_path_list = evaluation.state.parent_path.clone();
        if let Some(key) = evaluation.key {
            object_path_list.push(key.clone());
        }

        let mut expected = if evaluation.parent.expected_types.is_empty() {
            self.expected_types()
        } else {
            evaluation.parent.expected_types.clone()
        };
        if self.core.nullable && !is_required {
            expected.push(NULL_LABEL.to_string());
        }

        let (is_valid, exception) = self.check(value, evaluation);

        let object_path = join_object_path(&object_path_list);
        let actual = type_of(value);
        let message = if is_valid {
            None
        } else {
            Some(message::create_message(
                &object_path,
                &actual,
                &expected,
                evaluation.parent,
            ))
        };

        PropResult {
            is_valid,
            key: evaluation.key.cloned(),
            value: value.clone(),
            value_actual_type: actual,
            value_expected_type: expected.join(" | "),
            value_expected_type_list: expected,
            object_path,
            object_path_list,
            is_required,
            message,
            exception,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("expected_types", &self.expected_types())
            .field("nullable", &self.core.nullable)
            .field("required", &self.is_required())
            .field("nested", &self.core.nested)
            .finish()
    }
}
