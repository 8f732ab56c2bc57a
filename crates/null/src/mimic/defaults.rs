//! Declared defaults and custom methods for stand-in classes

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Mimic;

/// A method evaluated in the context of a stand-in record
pub type Method = Arc<dyn Fn(&dyn Mimic) -> Value + Send + Sync>;

/// Default value of a stand-in attribute
#[derive(Clone)]
pub enum AttributeDefault {
    /// A fixed value
    Literal(Value),
    /// Computed from the stand-in record on every read
    Computed(Method),
}

impl AttributeDefault {
    /// Create a computed default
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&dyn Mimic) -> Value + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Resolve the value for a record
    pub fn resolve(&self, record: &dyn Mimic) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Computed(method) => method(record),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Debug for AttributeDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<Value> for AttributeDefault {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// Attribute defaults declared for a stand-in class.
///
/// Each entry maps a set of attribute names to one default. Immutable once the
/// class is defined.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    entries: Vec<(Vec<String>, AttributeDefault)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a literal default to every listed attribute
    pub fn assign<I, S, V>(self, names: I, value: V) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.push(names, AttributeDefault::Literal(value.into()))
    }

    /// Assign a default computed from the record on every read
    pub fn compute<I, S, F>(self, names: I, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&dyn Mimic) -> Value + Send + Sync + 'static,
    {
        self.push(names, AttributeDefault::computed(f))
    }

    fn push<I, S>(mut self, names: I, default: AttributeDefault) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.entries.push((names, default));
        self
    }

    /// The default for an attribute. The first declaration of a name wins.
    pub fn get(&self, name: &str) -> Option<&AttributeDefault> {
        self.iter()
            .find(|(attribute, _)| *attribute == name)
            .map(|(_, default)| default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every (attribute, default) pair in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeDefault)> {
        self.entries.iter().flat_map(|(names, default)| {
            names.iter().map(move |name| (name.as_str(), default))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(names, _)| names.is_empty())
    }
}

/// Custom methods added to a stand-in class.
///
/// Body methods exist whether or not the model's table does, and win over any
/// accessor synthesized for the same name.
#[derive(Clone, Default)]
pub struct Body {
    methods: HashMap<String, Method>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a method; redefining a name replaces it
    pub fn define<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn Mimic) -> Value + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Body").field("methods", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignments_share_one_default() {
        let assignments = Assignments::new().assign(["team_name", "other"], "Unknown");

        assert!(assignments.contains("team_name"));
        assert!(assignments.contains("other"));
        assert!(!assignments.contains("name"));
        assert_eq!(assignments.iter().count(), 2);
    }

    #[test]
    fn test_first_declaration_wins() {
        let assignments = Assignments::new()
            .assign(["name"], "First")
            .assign(["name"], "Second");

        match assignments.get("name") {
            Some(AttributeDefault::Literal(value)) => assert_eq!(value, "First"),
            other => panic!("unexpected default: {:?}", other),
        }
    }

    #[test]
    fn test_empty_assignments() {
        assert!(Assignments::new().is_empty());
        assert!(Assignments::new().assign(Vec::<String>::new(), 1).is_empty());
        assert!(!Assignments::new().compute(["x"], |_| Value::Null).is_empty());
    }

    #[test]
    fn test_literal_from_value() {
        let default: AttributeDefault = Value::from("None").into();
        assert!(!default.is_computed());
        assert!(AttributeDefault::computed(|_| Value::Bool(true)).is_computed());
    }

    #[test]
    fn test_body_debug_lists_names() {
        let body = Body::new()
            .define("name", |_| Value::from("None"))
            .define("display_name", |_| Value::Null);

        assert!(body.contains("name"));
        assert_eq!(format!("{:?}", body), "Body { methods: [\"display_name\", \"name\"] }");
    }
}
