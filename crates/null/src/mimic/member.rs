//! Results of dot-style reads on a stand-in

use std::sync::Arc;

use serde_json::Value;

use crate::null::NullRecord;
use crate::relationships::EmptyRelation;

/// Whatever a member read resolves to
#[derive(Debug, Clone)]
pub enum Member {
    /// An attribute or body method value
    Value(Value),
    /// A to-many association: always empty
    Relation(EmptyRelation),
    /// A to-one association: the target model's Null record
    Record(Arc<NullRecord>),
}

impl Member {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Member::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Member::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&EmptyRelation> {
        match self {
            Member::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Arc<NullRecord>> {
        match self {
            Member::Record(record) => Some(record),
            _ => None,
        }
    }

    /// True for a `null` attribute value
    pub fn is_nil(&self) -> bool {
        matches!(self, Member::Value(Value::Null))
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Member::Value(a), Member::Value(b)) => a == b,
            (Member::Relation(a), Member::Relation(b)) => a == b,
            (Member::Record(a), Member::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Member::Value(value)
    }
}
