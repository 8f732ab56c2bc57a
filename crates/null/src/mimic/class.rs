//! Class-level state shared by every record of one stand-in class

use std::sync::{Arc, Weak};

use serde_json::{Map, Value};

use crate::error::NullResult;
use crate::model::{ModelDescriptor, RecordType};
use crate::registry::{Registry, RegistryInner};

use super::accessors::{synthesize, AccessorTable};
use super::defaults::{Assignments, Body};

/// A stand-in class bound to the model it imitates.
///
/// Holds only what was declared; building it never reads the model's schema.
#[derive(Debug)]
pub struct MimicClass {
    model: Arc<dyn ModelDescriptor>,
    record_type: RecordType,
    assignments: Assignments,
    body: Body,
    registry: Weak<RegistryInner>,
}

impl MimicClass {
    pub(crate) fn new(
        model: Arc<dyn ModelDescriptor>,
        record_type: RecordType,
        assignments: Assignments,
        body: Body,
        registry: Weak<RegistryInner>,
    ) -> Self {
        Self {
            model,
            record_type,
            assignments,
            body,
            registry,
        }
    }

    /// The model this class imitates
    pub fn mimic_model_class(&self) -> &Arc<dyn ModelDescriptor> {
        &self.model
    }

    /// Type identity of this stand-in class
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Table name of the imitated model
    pub fn table_name(&self) -> String {
        self.model.table_name()
    }

    /// Primary key name of the imitated model
    pub fn primary_key(&self) -> &str {
        self.model.primary_key_name()
    }

    pub fn has_query_constraints(&self) -> bool {
        false
    }

    pub fn composite_primary_key(&self) -> bool {
        false
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The registry this class was defined in
    pub fn registry(&self) -> NullResult<Registry> {
        Registry::upgrade(&self.registry)
    }

    /// Build accessors if the model's table exists; `None` means synthesis was skipped
    pub(crate) fn synthesize(
        &self,
        overrides: Option<&Map<String, Value>>,
    ) -> NullResult<Option<AccessorTable>> {
        if !self.model.table_exists() {
            tracing::warn!(
                "Table '{}' does not exist; skipping accessor synthesis for {}",
                self.model.table_name(),
                self.record_type
            );
            return Ok(None);
        }

        let table = synthesize(self.model.as_ref(), &self.assignments, &self.body, overrides)?;
        tracing::debug!(
            "Synthesized {} accessors for {}",
            table.len(),
            self.record_type
        );

        Ok(Some(table))
    }
}
