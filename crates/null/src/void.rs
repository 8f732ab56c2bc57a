//! Void - Repeatable stand-ins with per-record attribute overrides
//!
//! Unlike Null, a Void class hands out a fresh record on every call. Each
//! record synthesizes its own accessors at construction, layering the
//! overrides it was given over the class-level assignments.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{NullError, NullResult};
use crate::mimic::{AccessorTable, AssociationCache, Mimic, MimicClass};
use crate::model::NullObject;

/// Per-record attribute values passed to `void`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides(Map<String, Value>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute override
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Overrides {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// The Void class of a model (`Product::Void`)
#[derive(Debug)]
pub struct VoidClass {
    class: Arc<MimicClass>,
    strict_overrides: bool,
}

impl VoidClass {
    pub(crate) fn new(class: MimicClass, strict_overrides: bool) -> Self {
        Self {
            class: Arc::new(class),
            strict_overrides,
        }
    }

    pub fn class(&self) -> &MimicClass {
        &self.class
    }

    /// Build a new record with its own overrides
    pub fn void(&self, overrides: Overrides) -> NullResult<VoidRecord> {
        let accessors = self.class.synthesize(Some(overrides.as_map()))?;

        if let Some(table) = &accessors {
            self.check_overrides(table, &overrides)?;
        }

        Ok(VoidRecord {
            class: Arc::clone(&self.class),
            accessors,
            overrides,
            associations: AssociationCache::new(),
        })
    }

    fn check_overrides(&self, table: &AccessorTable, overrides: &Overrides) -> NullResult<()> {
        let body = self.class.body();

        for name in overrides.names() {
            if body.contains(name) || name == "id" {
                if self.strict_overrides {
                    return Err(NullError::ShadowedOverride {
                        model: self.class.mimic_model_class().model_name().to_string(),
                        name: name.to_string(),
                    });
                }

                tracing::warn!(
                    "Ignoring override '{}' for {}: shadowed by a method",
                    name,
                    self.class.record_type()
                );
                continue;
            }

            if table.contains(name) {
                continue;
            }

            if self.strict_overrides {
                return Err(NullError::UnknownOverride {
                    model: self.class.mimic_model_class().model_name().to_string(),
                    name: name.to_string(),
                });
            }

            tracing::warn!(
                "Ignoring override '{}' for {}: not an attribute",
                name,
                self.class.record_type()
            );
        }

        Ok(())
    }

    pub fn table_name(&self) -> String {
        self.class.table_name()
    }

    pub fn primary_key(&self) -> &str {
        self.class.primary_key()
    }

    pub fn has_query_constraints(&self) -> bool {
        self.class.has_query_constraints()
    }

    pub fn composite_primary_key(&self) -> bool {
        self.class.composite_primary_key()
    }
}

/// A Void record; every call to `void` builds an independent one
#[derive(Debug)]
pub struct VoidRecord {
    class: Arc<MimicClass>,
    accessors: Option<AccessorTable>,
    overrides: Overrides,
    associations: AssociationCache,
}

impl VoidRecord {
    /// The overrides this record was built with
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }
}

impl NullObject for VoidRecord {
    fn is_null(&self) -> bool {
        true
    }
}

impl Mimic for VoidRecord {
    fn class(&self) -> &MimicClass {
        &self.class
    }

    fn accessors(&self) -> Option<&AccessorTable> {
        self.accessors.as_ref()
    }

    fn association_cache(&self) -> &AssociationCache {
        &self.associations
    }

    fn as_mimic(&self) -> &dyn Mimic {
        self
    }
}
