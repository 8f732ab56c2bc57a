//! Mimic - Shared behaviour of every stand-in record
//!
//! A stand-in answers the same reads as a record of the model it imitates.
//! Dot-style reads go through `get`, which looks in order at:
//!
//! 1. body methods declared with the class
//! 2. the built-in `id`, always `null`
//! 3. synthesized attribute accessors (absent until the table exists)
//! 4. associations of the imitated model, resolved on demand; to-many results
//!    are memoized per record, to-one results are the target's Null singleton
//!
//! and fails with `NullError::NoSuchMember` when nothing matches. Bracket reads
//! (`read`) stop after step 3 and fall back to `null` instead of failing.

pub mod accessors;
pub mod cache;
pub mod class;
pub mod defaults;
pub mod member;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{NullError, NullResult};
use crate::model::{ModelDescriptor, NullObject, RecordType};

pub use accessors::AccessorTable;
pub use cache::AssociationCache;
pub use class::MimicClass;
pub use defaults::{Assignments, AttributeDefault, Body, Method};
pub use member::Member;

/// Behaviour shared by Null and Void records
pub trait Mimic: NullObject + Send + Sync + fmt::Debug {
    /// The stand-in class this record belongs to
    fn class(&self) -> &MimicClass;

    /// Synthesized accessors, if synthesis has run
    fn accessors(&self) -> Option<&AccessorTable>;

    /// Associations already resolved on this record
    fn association_cache(&self) -> &AssociationCache;

    fn as_mimic(&self) -> &dyn Mimic;

    /// The model this record imitates
    fn mimic_model_class(&self) -> &Arc<dyn ModelDescriptor> {
        self.class().mimic_model_class()
    }

    fn record_type(&self) -> &RecordType {
        self.class().record_type()
    }

    fn is_persisted(&self) -> bool {
        false
    }

    fn is_new_record(&self) -> bool {
        false
    }

    fn is_destroyed(&self) -> bool {
        false
    }

    fn has_query_constraints(&self) -> bool {
        false
    }

    /// True for the imitated model's type and for this stand-in's own type
    fn is_a(&self, record_type: &RecordType) -> bool {
        *record_type == self.mimic_model_class().record_type() || record_type == self.record_type()
    }

    fn id(&self) -> Value {
        Value::Null
    }

    /// Raw column read; a stand-in has no stored row
    fn read_attribute_raw(&self, _name: &str) -> Value {
        Value::Null
    }

    /// Resolve a body method, `id` or synthesized accessor
    fn accessor_value(&self, name: &str) -> Option<Value> {
        if let Some(method) = self.class().body().get(name) {
            return Some(method(self.as_mimic()));
        }

        if name == "id" {
            return Some(self.id());
        }

        self.accessors()
            .and_then(|table| table.get(name))
            .map(|default| default.resolve(self.as_mimic()))
    }

    /// Dot-style attribute read; fails for names with no accessor
    fn attribute(&self, name: &str) -> NullResult<Value> {
        self.accessor_value(name)
            .ok_or_else(|| NullError::no_such_member(self.record_type(), name))
    }

    /// Bracket-style read; unknown names and associations read as `null`
    fn read(&self, key: &str) -> Value {
        self.accessor_value(key).unwrap_or(Value::Null)
    }

    /// Resolve an association of the imitated model
    fn association(&self, name: &str) -> NullResult<Member> {
        if let Some(member) = self.association_cache().get(name) {
            return Ok(member);
        }

        let association = self
            .mimic_model_class()
            .association(name)
            .ok_or_else(|| NullError::no_such_member(self.record_type(), name))?;

        let member = self.class().registry()?.resolve_association(&association)?;
        tracing::debug!(
            "Resolved association '{}' on {} to {}",
            name,
            self.record_type(),
            association.target
        );

        // The target's Null record is already a registry singleton; holding it
        // here would keep self-referencing records alive.
        if let Member::Record(_) = member {
            return Ok(member);
        }

        Ok(self.association_cache().get_or_insert(name, member))
    }

    /// Dot-style read of any member
    fn get(&self, name: &str) -> NullResult<Member> {
        match self.accessor_value(name) {
            Some(value) => Ok(Member::Value(value)),
            None => self.association(name),
        }
    }

    /// Whether `get` can answer this name
    fn responds_to(&self, name: &str) -> bool {
        self.class().body().contains(name)
            || self.accessors().is_some_and(|table| table.contains(name))
            || name == "id"
            || self.mimic_model_class().association(name).is_some()
    }
}
