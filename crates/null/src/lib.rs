//! # elif-null: Null and Void stand-ins for elif ORM models
//!
//! Substitute a record that behaves like a model instance wherever the real
//! one is absent, instead of checking for `None` at every call site.
//!
//! - **Null**: one singleton record per model, e.g. "the user's business"
//!   when the user has none.
//! - **Void**: a fresh record per call, each with its own attribute overrides.
//!
//! Both answer the model's attribute reads, pass `is_a` checks for the model,
//! and resolve its associations to empty relations or further Null records.
//! Declaring either never touches storage; accessors are synthesized from the
//! model's schema on first use, once its table exists.
//!
//! ```ignore
//! let registry = Registry::new();
//! registry.define_null(user_model, Assignments::new().assign(["team_name"], "Unknown"), Body::new())?;
//!
//! let user = registry.null("User")?;
//! assert_eq!(user.attribute("team_name")?, "Unknown");
//! assert!(!user.is_persisted());
//! ```

pub mod config;
pub mod error;
pub mod mimic;
pub mod model;
pub mod null;
pub mod registry;
pub mod relationships;
pub mod void;

// Re-export core traits and types
pub use config::NullConfig;
pub use error::{NullError, NullResult};
pub use mimic::{Assignments, AttributeDefault, Body, Member, Mimic, MimicClass};
pub use model::{ModelDescriptor, NullObject, RecordType, StaticModel};
pub use null::{NullClass, NullRecord};
pub use registry::Registry;
pub use relationships::{Association, AssociationKind, EmptyRelation, OrderDirection, Row};
pub use void::{Overrides, VoidClass, VoidRecord};
