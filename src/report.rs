//! Validation results, reports and the `validate` entry point.
//!
//! A [`Report`] is the stable output of a validation run. It serialises with
//! camelCase field names (`isValid`, `objectPath`, `valueExpectedTypeList`, ...)
//! so it can be embedded directly in logs or API error responses.

use crate::error::{Exception, Result};
use crate::path::PathSegment;
use crate::schema::{RecursionGate, Schema, Walker};
use crate::value::Value;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key used when a bare rule is validated without a label.
pub const ANONYMOUS_KEY: &str = "<anonymous>";

/// Outcome of evaluating one rule against one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropResult {
    pub is_valid: bool,
    /// Field name or array index; `None` for an un-keyed root
    pub key: Option<PathSegment>,
    pub value: Value,
    pub value_actual_type: String,
    /// Expected labels joined with ` | `
    pub value_expected_type: String,
    pub value_expected_type_list: Vec<String>,
    /// Human readable path, e.g. `a.b[0].c`
    pub object_path: String,
    pub object_path_list: Vec<PathSegment>,
    pub is_required: bool,
    /// Present iff the result is invalid
    pub message: Option<String>,
    /// Present iff the predicate failed to run
    pub exception: Option<Exception>,
}

/// Aggregate of all results of one validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub is_valid: bool,
    pub results: Vec<PropResult>,
    /// The invalid results, in the same order as in `results`
    pub errors: Vec<PropResult>,
}

impl Report {
    pub fn from_results(results: Vec<PropResult>) -> Self {
        let errors: Vec<PropResult> = results
            .iter()
            .filter(|result| !result.is_valid)
            .cloned()
            .collect();
        Self {
            is_valid: errors.is_empty(),
            results,
            errors,
        }
    }

    /// Messages of all invalid results, in order
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|error| error.message.as_deref())
            .collect()
    }

    /// Invalid results grouped by object path
    pub fn errors_by_path(&self) -> HashMap<String, Vec<&PropResult>> {
        let mut map: HashMap<String, Vec<&PropResult>> = HashMap::new();
        for error in &self.errors {
            map.entry(error.object_path.clone()).or_default().push(error);
        }
        map
    }
}

/// Where the validated data sits, for reporting purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Label {
    /// A bare rule is reported under `<anonymous>`
    #[default]
    Anonymous,
    /// Every path is prefixed with these segments. A bare rule is reported
    /// under the last one.
    Path(Vec<PathSegment>),
    /// A bare rule is evaluated directly, with no key
    Unwrapped,
}

impl Label {
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self::Path(segments.into_iter().map(Into::into).collect())
    }

    fn segments(&self) -> &[PathSegment] {
        match self {
            Self::Path(segments) => segments,
            Self::Anonymous | Self::Unwrapped => &[],
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::Path(vec![PathSegment::from(name)])
    }
}

impl From<Vec<PathSegment>> for Label {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::Path(segments)
    }
}

/// Options for a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateOptions {
    pub label: Label,
    pub recursion_gate: RecursionGate,
}

impl ValidateOptions {
    /// Reads options from JSON, e.g. `{"label": {"path": ["user"]}, "recursionGate": "truthy"}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configured validation entry point.
///
/// ```rust
/// use prop_validator::{prop_types, Validator, Value};
///
/// let report = Validator::new()
///     .label("port")
///     .validate(&prop_types::integer().into(), &Value::from("80"));
/// assert!(!report.is_valid);
/// assert_eq!(report.errors[0].object_path, "port");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidateOptions,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidateOptions) -> Self {
        Self { options }
    }

    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.options.label = label.into();
        self
    }

    /// Evaluate bare rules directly instead of under a key
    pub fn unwrapped(mut self) -> Self {
        self.options.label = Label::Unwrapped;
        self
    }

    pub fn recursion_gate(mut self, gate: RecursionGate) -> Self {
        self.options.recursion_gate = gate;
        self
    }

    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validates `data` against `schema` and aggregates the results.
    pub fn validate(&self, schema: &Schema, data: &Value) -> Report {
        let walker = Walker::new(self.options.recursion_gate);
        let segments = self.options.label.segments();

        let results = match (schema, &self.options.label) {
            (Schema::Rule(_), Label::Unwrapped) => walker.walk(schema, data, Vec::new(), false),
            (Schema::Rule(rule), _) => {
                let (key, parent_path) = match segments.split_last() {
                    Some((last, parent)) => (last.clone(), parent.to_vec()),
                    None => (PathSegment::from(ANONYMOUS_KEY), Vec::new()),
                };
                walker.walk_entry(&key, rule, data, parent_path)
            }
            (Schema::Fields(_), _) => walker.walk(schema, data, segments.to_vec(), false),
        };

        let report = Report::from_results(results);
        debug!(
            "Validation finished: {} results, {} errors",
            report.results.len(),
            report.errors.len()
        );
        report
    }
}

/// Validates `data` against `schema` with default options.
pub fn validate(schema: &Schema, data: &Value) -> Report {
    Validator::new().validate(schema, data)
}
