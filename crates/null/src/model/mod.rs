//! Model System - What a stand-in needs to know about the model it imitates
//!
//! - `descriptor`: the `ModelDescriptor` reflection trait and a static implementation
//! - `record_type`: type identity used by `is_a` checks
//! - `inflection`: table naming conventions

pub mod descriptor;
pub mod inflection;
pub mod record_type;

pub use descriptor::{ModelDescriptor, NullObject, StaticModel};
pub use inflection::tableize;
pub use record_type::RecordType;
