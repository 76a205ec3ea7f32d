//! The dynamic data tree that schemas are evaluated against.
//!
//! Values mirror what an untyped caller can hand over: JSON-like scalars and
//! containers, plus a handful of reference types (functions, symbols, classes and
//! their instances, regular expressions, errors) that carry identity.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A node of the data tree.
///
/// `Undefined` and `Null` are distinct: a missing property reads as `Undefined`,
/// while `Null` is an explicit empty value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Regex(Regex),
    Error(ErrorValue),
    Array(Vec<Value>),
    Object(Map),
    Class(Class),
    Instance(Instance),
}

static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Build an object from key/value pairs, keeping their order
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(entries.into_iter().collect())
    }

    /// Build an array from values
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Compile a regular expression value
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Regex)
    }

    /// Create an error value with the given name (`Error`, `TypeError`, ...)
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error(ErrorValue::new(name, message))
    }

    /// Create a fresh symbol; every call yields a distinct identity
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(description))
    }

    /// Create a named function handle
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(Function::new(name))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for `Undefined` and `Null`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Loose truthiness: everything except `undefined`, `null`, `false`, `0`,
    /// `NaN` and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Own properties of this value: object entries or instance fields
    pub fn properties(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            Self::Instance(instance) => Some(instance.fields()),
            _ => None,
        }
    }

    /// Look up a property, if this value has one under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties().and_then(|map| map.get(key))
    }

    /// Look up a property, reading missing ones as `Undefined`
    pub fn property(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&UNDEFINED)
    }
}

impl PartialEq for Value {
    /// Structural equality; reference types compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a.ptr_eq(b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Class(a), Self::Class(b)) => a.ptr_eq(b),
            (Self::Instance(a), Self::Instance(b)) => {
                a.class().ptr_eq(b.class()) && a.fields() == b.fields()
            }
            _ => false,
        }
    }
}

/// Insertion-ordered string-keyed map used for objects and instance fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one. Re-inserting an existing key
    /// keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Opaque function handle. Equality is identity.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

struct FunctionInner {
    name: String,
    is_async: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(FunctionInner {
            name: name.into(),
            is_async: false,
        }))
    }

    pub fn new_async(name: impl Into<String>) -> Self {
        Self(Arc::new(FunctionInner {
            name: name.into(),
            is_async: true,
        }))
    }

    /// Function name; empty for anonymous functions
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn is_async(&self) -> bool {
        self.0.is_async
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.0.name)
            .field("is_async", &self.0.is_async)
            .finish()
    }
}

/// Unique symbol with an optional description. Equality is identity.
#[derive(Clone)]
pub struct Symbol(Arc<String>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(description.into()))
    }

    pub fn description(&self) -> &str {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Nominal type descriptor with single inheritance.
///
/// Used with instance-of checks: an [`Instance`] belongs to its own class and to
/// every ancestor of it.
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

struct ClassInner {
    name: String,
    parent: Option<Class>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            parent: None,
        }))
    }

    /// Create a subclass of `parent`
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// True if `ancestor` is this class or appears in its parent chain
    pub fn is_subclass_of(&self, ancestor: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.ptr_eq(ancestor) {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Create an instance of this class with the given fields
    pub fn instantiate<K, V, I>(&self, fields: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Instance(Instance::new(self.clone(), fields.into_iter().collect()))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Class");
        debug.field("name", &self.0.name);
        if let Some(parent) = &self.0.parent {
            debug.field("parent", &parent.name());
        }
        debug.finish()
    }
}

/// An object created from a [`Class`].
#[derive(Debug, Clone)]
pub struct Instance {
    class: Class,
    fields: Map,
}

impl Instance {
    pub fn new(class: Class, fields: Map) -> Self {
        Self { class, fields }
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn fields(&self) -> &Map {
        &self.fields
    }

    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class.is_subclass_of(class)
    }
}

/// An error object carried as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    name: String,
    message: String,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wrap a Rust error as a generic `Error` value
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new("Error", error.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
