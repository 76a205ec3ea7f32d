//! Schema tree types.
//!
//! A schema is either one bare [`Rule`] or an ordered mapping of field names
//! to rules. Field order is significant: results come out in the order the
//! fields were declared.

use crate::rule::Rule;

/// Top-level schema accepted by the evaluator.
#[derive(Debug, Clone)]
pub enum Schema {
    /// A single rule applied to the whole value
    Rule(Rule),
    /// Named rules applied to the properties of an object
    Fields(Fields),
}

impl Schema {
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Self::Rule(rule) => Some(rule),
            Self::Fields(_) => None,
        }
    }

    pub fn as_fields(&self) -> Option<&Fields> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Rule(_) => None,
        }
    }

    /// Short description used when a combinator rejects a schema
    pub fn describe(&self) -> String {
        match self {
            Self::Rule(rule) => format!("[Rule: {}]", rule.expected_types().join(" | ")),
            Self::Fields(fields) => {
                let keys: Vec<&str> = fields.keys().collect();
                format!("{{ {} }}", keys.join(", "))
            }
        }
    }
}

impl From<Rule> for Schema {
    fn from(rule: Rule) -> Self {
        Self::Rule(rule)
    }
}

impl From<&Rule> for Schema {
    fn from(rule: &Rule) -> Self {
        Self::Rule(rule.clone())
    }
}

impl From<Fields> for Schema {
    fn from(fields: Fields) -> Self {
        Self::Fields(fields)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Rule); N]> for Schema {
    fn from(entries: [(K, Rule); N]) -> Self {
        Self::Fields(Fields::from(entries))
    }
}

/// Insertion-ordered mapping from field name to rule.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Vec<(String, Rule)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Fields::insert`]
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds a field. Redefining a field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, rule)),
            None => {
                self.entries.push((name, rule));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, rule)| rule)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, rule) in iter {
            fields.insert(name, rule);
        }
        fields
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Rule); N]> for Fields {
    fn from(entries: [(K, Rule); N]) -> Self {
        entries.into_iter().collect()
    }
}
