//! Association Metadata - Reflection data a model exposes about its relationships

use serde::{Deserialize, Serialize};

/// Defines the type of relationship between models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssociationKind {
    /// One-to-one relationship (hasOne)
    HasOne,
    /// One-to-many relationship (hasMany)
    HasMany,
    /// Many-to-one relationship (belongsTo)
    BelongsTo,
}

impl AssociationKind {
    /// Returns true if this relationship returns a collection
    pub fn is_collection(self) -> bool {
        matches!(self, Self::HasMany)
    }
}

/// A single association reflected from a model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Association {
    /// Name of the association (field name in the model)
    pub name: String,

    /// The type of relationship
    pub kind: AssociationKind,

    /// The related model's type name
    pub target: String,
}

impl Association {
    /// Create a new association
    pub fn new(name: impl Into<String>, kind: AssociationKind, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
        }
    }

    /// Create a hasOne association
    pub fn has_one(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasOne, target)
    }

    /// Create a hasMany association
    pub fn has_many(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasMany, target)
    }

    /// Create a belongsTo association
    pub fn belongs_to(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::BelongsTo, target)
    }

    /// Returns true if this association resolves to a collection
    pub fn is_collection(&self) -> bool {
        self.kind.is_collection()
    }
}
