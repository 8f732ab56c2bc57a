//! Model Descriptor - Reflection contract of the real model a stand-in imitates
//!
//! Stand-ins never talk to storage. Everything they know about a model comes
//! through this trait: attribute names, associations, table metadata and
//! whether the table exists yet.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::{NullError, NullResult};
use crate::relationships::Association;

use super::inflection::tableize;
use super::record_type::RecordType;

/// Reflection metadata of a persisted model
pub trait ModelDescriptor: Send + Sync + Debug {
    /// Type name of the model (`User`)
    fn model_name(&self) -> &str;

    /// Table name for this model
    fn table_name(&self) -> String {
        tableize(self.model_name())
    }

    /// Primary key field name
    fn primary_key_name(&self) -> &str {
        "id"
    }

    /// Whether the backing table exists. Must be safe to call before migrations run.
    fn table_exists(&self) -> bool;

    /// Column names of the model, in declaration order.
    /// Only guaranteed to succeed once `table_exists()` is true.
    fn attribute_names(&self) -> NullResult<Vec<String>>;

    /// Associations declared on the model. Never touches storage.
    fn associations(&self) -> Vec<Association>;

    /// Find an association by name
    fn association(&self, name: &str) -> Option<Association> {
        self.associations().into_iter().find(|association| association.name == name)
    }

    /// Type identity of the real model
    fn record_type(&self) -> RecordType {
        RecordType::model(self.model_name())
    }
}

/// Answers the "is this the absent record?" question.
///
/// Real models implement it with the default; stand-ins answer `true`.
pub trait NullObject {
    fn is_null(&self) -> bool {
        false
    }
}

/// In-memory model descriptor built from declared metadata
#[derive(Debug)]
pub struct StaticModel {
    name: String,
    table_name: Option<String>,
    primary_key: String,
    attributes: Vec<String>,
    associations: Vec<Association>,
    table_exists: AtomicBool,
    schema_error: Option<String>,
    schema_reads: AtomicUsize,
}

impl StaticModel {
    /// Create a descriptor whose table exists and has no columns yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            primary_key: "id".to_string(),
            attributes: Vec::new(),
            associations: Vec::new(),
            table_exists: AtomicBool::new(true),
            schema_error: None,
            schema_reads: AtomicUsize::new(0),
        }
    }

    /// Set the column names
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Override the conventional table name
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Override the primary key name
    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }

    pub fn has_one(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.associations.push(Association::has_one(name, target));
        self
    }

    pub fn has_many(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.associations.push(Association::has_many(name, target));
        self
    }

    pub fn belongs_to(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.associations.push(Association::belongs_to(name, target));
        self
    }

    /// Start without a backing table, as before migrations run
    pub fn without_table(self) -> Self {
        self.table_exists.store(false, Ordering::SeqCst);
        self
    }

    /// Make every schema read fail with the given message
    pub fn failing_schema(mut self, message: impl Into<String>) -> Self {
        self.schema_error = Some(message.into());
        self
    }

    /// Flip table existence, e.g. after a migration ran
    pub fn set_table_exists(&self, exists: bool) {
        self.table_exists.store(exists, Ordering::SeqCst);
    }

    /// Number of times `attribute_names` has been called
    pub fn schema_reads(&self) -> usize {
        self.schema_reads.load(Ordering::SeqCst)
    }
}

impl ModelDescriptor for StaticModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn table_name(&self) -> String {
        self.table_name
            .clone()
            .unwrap_or_else(|| tableize(&self.name))
    }

    fn primary_key_name(&self) -> &str {
        &self.primary_key
    }

    fn table_exists(&self) -> bool {
        self.table_exists.load(Ordering::SeqCst)
    }

    fn attribute_names(&self) -> NullResult<Vec<String>> {
        self.schema_reads.fetch_add(1, Ordering::SeqCst);

        match &self.schema_error {
            Some(message) => Err(NullError::schema(message.clone())),
            None => Ok(self.attributes.clone()),
        }
    }

    fn associations(&self) -> Vec<Association> {
        self.associations.clone()
    }
}
