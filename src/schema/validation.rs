//! Evaluator that walks a schema and a data tree side by side.
//!
//! Fields are evaluated in declaration order. Each result is followed
//! directly by the results of its nested rules (depth first), and superfluous
//! keys of an exact level come last.

use super::types::{Fields, Schema};
use crate::path::{PathSegment, join_object_path};
use crate::report::PropResult;
use crate::rule::{ContainerKind, Evaluation, Nested, ParentContext, Rule, WalkState, make_rule};
use crate::value::{Value, type_of};
use log::trace;
use serde::{Deserialize, Serialize};

/// Decides which values the evaluator recurses into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecursionGate {
    /// Recurse into everything except `undefined` and `null`
    #[default]
    Nullish,
    /// Recurse into truthy values only; `0`, `""` and `false` are skipped too
    Truthy,
}

impl RecursionGate {
    pub fn admits(self, value: &Value) -> bool {
        match self {
            Self::Nullish => !value.is_nullish(),
            Self::Truthy => value.is_truthy(),
        }
    }
}

/// Walks schemas against data and collects the results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker {
    gate: RecursionGate,
}

impl Walker {
    pub fn new(gate: RecursionGate) -> Self {
        Self { gate }
    }

    /// Evaluates `schema` against `data` below `parent_path`.
    ///
    /// A bare rule is evaluated directly against `data` without a key. A field
    /// mapping reads each field from `data`; `exact` rejects keys the mapping
    /// does not name.
    pub fn walk(
        &self,
        schema: &Schema,
        data: &Value,
        parent_path: Vec<PathSegment>,
        exact: bool,
    ) -> Vec<PropResult> {
        let mut results = Vec::new();
        let state = WalkState::new(parent_path, exact);
        match schema {
            Schema::Rule(rule) => self.walk_root(rule, data, &state, &mut results),
            Schema::Fields(fields) => self.walk_fields(fields, data, &state, &mut results),
        }
        results
    }

    /// Evaluates a single keyed entry, as if `rule` were the only field of a
    /// mapping and `value` its data. The rule sees `{key: value}` as its
    /// container.
    pub fn walk_entry(
        &self,
        key: &PathSegment,
        rule: &Rule,
        value: &Value,
        parent_path: Vec<PathSegment>,
    ) -> Vec<PropResult> {
        let mut results = Vec::new();
        let state = WalkState::new(parent_path, false);
        let container = Value::object([(key.to_string(), value.clone())]);
        self.walk_field(key, rule, value, Some(&container), &state, &mut results);
        results
    }

    fn walk_root(&self, rule: &Rule, data: &Value, state: &WalkState, results: &mut Vec<PropResult>) {
        trace!(
            "Evaluating root '{}' of type {}",
            join_object_path(&state.parent_path),
            type_of(data)
        );
        let parent = ParentContext::default();
        results.push(rule.evaluate(data, &Evaluation::root(state, &parent)));

        if let Some(nested) = rule.nested() {
            if self.gate.admits(data) {
                self.descend(nested, data, state.parent_path.clone(), results);
            }
        }
    }

    fn walk_fields(
        &self,
        fields: &Fields,
        data: &Value,
        state: &WalkState,
        results: &mut Vec<PropResult>,
    ) {
        for (name, rule) in fields.iter() {
            let key = PathSegment::from(name);
            self.walk_field(&key, rule, data.property(name), Some(data), state, results);
        }

        if !state.exact {
            return;
        }
        let Some(properties) = data.properties() else {
            return;
        };
        for (name, value) in properties.iter() {
            if fields.contains_key(name) {
                continue;
            }
            trace!("Superfluous key '{}' at '{}'", name, join_object_path(&state.parent_path));
            let key = PathSegment::from(name);
            let parent = ParentContext {
                value_should_not_be_defined: true,
                ..ParentContext::default()
            };
            results.push(
                definedness_check().evaluate(value, &Evaluation::new(Some(&key), Some(data), state, &parent)),
            );
        }
    }

    fn walk_field(
        &self,
        key: &PathSegment,
        rule: &Rule,
        value: &Value,
        container: Option<&Value>,
        state: &WalkState,
        results: &mut Vec<PropResult>,
    ) {
        if rule.is_required() && value.is_undefined() {
            trace!("Required key '{}' is missing", key);
            let parent = ParentContext {
                expected_types: rule.expected_types(),
                value_should_be_defined: true,
                ..ParentContext::default()
            };
            results.push(
                definedness_check().evaluate(value, &Evaluation::new(Some(key), container, state, &parent)),
            );
            return;
        }

        trace!("Evaluating '{}' of type {}", key, type_of(value));
        let parent = ParentContext::default();
        results.push(rule.evaluate(value, &Evaluation::new(Some(key), container, state, &parent)));

        if let Some(nested) = rule.nested() {
            if self.gate.admits(value) {
                let mut path = state.parent_path.clone();
                path.push(key.clone());
                self.descend(nested, value, path, results);
            }
        }
    }

    fn descend(&self, nested: &Nested, value: &Value, path: Vec<PathSegment>, results: &mut Vec<PropResult>) {
        match nested {
            Nested::Shape { fields, exact } => {
                let state = WalkState::new(path, *exact);
                self.walk_fields(fields, value, &state, results);
            }
            Nested::Members { container, inner } => {
                let members: Vec<(PathSegment, &Value)> = match (container, value) {
                    (ContainerKind::Array, Value::Array(items)) => items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| (PathSegment::Index(index), item))
                        .collect(),
                    (ContainerKind::Object, Value::Object(map)) => map
                        .iter()
                        .map(|(key, item)| (PathSegment::from(key), item))
                        .collect(),
                    _ => Vec::new(),
                };

                for (segment, member) in members {
                    if !self.gate.admits(member) {
                        continue;
                    }
                    let mut member_path = path.clone();
                    member_path.push(segment);
                    self.descend(inner, member, member_path, results);
                }
            }
        }
    }
}

/// Walks with the default recursion gate.
pub fn walk(schema: &Schema, data: &Value, parent_path: Vec<PathSegment>, exact: bool) -> Vec<PropResult> {
    Walker::default().walk(schema, data, parent_path, exact)
}

/// Fails every defined value. Paired with a parent context flag it reports a
/// missing required field or a key an exact schema does not name.
fn definedness_check() -> Rule {
    make_rule(|_: &Value, _: &Evaluation<'_>| Ok(false), Vec::<String>::new(), false, true)
}
