//! Accessor synthesis - Builds the name -> resolver table a stand-in reads through

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::NullResult;
use crate::model::ModelDescriptor;

use super::defaults::{AttributeDefault, Assignments, Body};

/// Synthesized attribute accessors of a stand-in, keyed by attribute name
#[derive(Debug, Clone, Default)]
pub struct AccessorTable {
    accessors: HashMap<String, AttributeDefault>,
}

impl AccessorTable {
    pub fn get(&self, name: &str) -> Option<&AttributeDefault> {
        self.accessors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }

    /// Define an accessor unless one with this name (or a body method) already exists
    fn define(&mut self, body: &Body, name: &str, default: AttributeDefault) {
        if body.contains(name) || self.accessors.contains_key(name) {
            return;
        }
        self.accessors.insert(name.to_string(), default);
    }
}

/// Build the accessor table for a model whose table exists.
///
/// Assigned attributes come first and resolve to their configured default, or
/// to the per-instance override when one is given. Every remaining model
/// attribute resolves to the override or `null`. Body methods shadow both.
pub fn synthesize(
    model: &dyn ModelDescriptor,
    assignments: &Assignments,
    body: &Body,
    overrides: Option<&Map<String, Value>>,
) -> NullResult<AccessorTable> {
    let attribute_names = model.attribute_names()?;
    let override_for = |name: &str| overrides.and_then(|values| values.get(name)).cloned();

    let mut table = AccessorTable::default();

    for (name, default) in assignments.iter() {
        let default = match override_for(name) {
            Some(value) => AttributeDefault::Literal(value),
            None => default.clone(),
        };
        table.define(body, name, default);
    }

    for name in &attribute_names {
        let value = override_for(name).unwrap_or(Value::Null);
        table.define(body, name, AttributeDefault::Literal(value));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NullError;
    use crate::model::StaticModel;

    fn literal(table: &AccessorTable, name: &str) -> Option<Value> {
        match table.get(name) {
            Some(AttributeDefault::Literal(value)) => Some(value.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_each_attribute_gets_exactly_one_accessor() {
        let model = StaticModel::new("User").attributes(["id", "name", "team_name"]);
        let assignments = Assignments::new().assign(["team_name", "other"], "Unknown");

        let table = synthesize(&model, &assignments, &Body::new(), None).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(literal(&table, "team_name"), Some(Value::from("Unknown")));
        assert_eq!(literal(&table, "other"), Some(Value::from("Unknown")));
        assert_eq!(literal(&table, "name"), Some(Value::Null));
        assert_eq!(literal(&table, "id"), Some(Value::Null));
    }

    #[test]
    fn test_body_methods_are_not_synthesized() {
        let model = StaticModel::new("User").attributes(["id", "name"]);
        let body = Body::new().define("name", |_| Value::from("None"));

        let table = synthesize(&model, &Assignments::new(), &body, None).unwrap();

        assert!(!table.contains("name"));
        assert!(table.contains("id"));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let model = StaticModel::new("Product").attributes(["id", "name", "price"]);
        let assignments = Assignments::new().compute(["name"], |_| Value::from("Computed"));
        let mut overrides = Map::new();
        overrides.insert("name".to_string(), Value::from("Gadget"));
        overrides.insert("price".to_string(), Value::from(10));

        let table = synthesize(&model, &assignments, &Body::new(), Some(&overrides)).unwrap();

        assert_eq!(literal(&table, "name"), Some(Value::from("Gadget")));
        assert_eq!(literal(&table, "price"), Some(Value::from(10)));
        assert_eq!(literal(&table, "id"), Some(Value::Null));
    }

    #[test]
    fn test_schema_errors_propagate() {
        let model = StaticModel::new("User").failing_schema("connection refused");

        let result = synthesize(&model, &Assignments::new(), &Body::new(), None);

        assert_eq!(result.unwrap_err(), NullError::schema("connection refused"));
    }
}
