//! Relationship reflection and the empty results stand-ins return for them

pub mod metadata;
pub mod relation;

pub use metadata::{Association, AssociationKind};
pub use relation::{EmptyRelation, OrderDirection, RelationCondition, RelationOperator, Row};
