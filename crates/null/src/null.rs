//! Null - The singleton stand-in of a model
//!
//! One `NullClass` per model, one `NullRecord` per class for the life of the
//! registry. The record is created on first access; its accessors are
//! synthesized on the first access at which the model's table exists, exactly
//! once, even under concurrent first access.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{NullError, NullResult};
use crate::mimic::{AccessorTable, AssociationCache, Mimic, MimicClass};
use crate::model::NullObject;

/// Class-level state read by the singleton record
#[derive(Debug)]
struct NullState {
    class: MimicClass,
    accessors: OnceCell<AccessorTable>,
}

impl NullState {
    /// Synthesize accessors once the table exists; a no-op afterwards
    fn initialize(&self) -> NullResult<()> {
        if self.accessors.get().is_some() {
            return Ok(());
        }

        // Concurrent callers block until the first finishes. A skipped
        // synthesis leaves the cell empty so a later access can retry.
        let result = self.accessors.get_or_try_init(|| -> Result<AccessorTable, InitError> {
            self.class.synthesize(None)?.ok_or(InitError::Skipped)
        });

        match result {
            Ok(_) | Err(InitError::Skipped) => Ok(()),
            Err(InitError::Failed(err)) => Err(err),
        }
    }
}

/// Why initialization left the accessor cell empty
enum InitError {
    /// The table does not exist yet
    Skipped,
    Failed(NullError),
}

impl From<NullError> for InitError {
    fn from(err: NullError) -> Self {
        InitError::Failed(err)
    }
}

/// The Null class of a model (`User::Null`)
#[derive(Debug)]
pub struct NullClass {
    state: Arc<NullState>,
    instance: OnceCell<Arc<NullRecord>>,
}

impl NullClass {
    pub(crate) fn new(class: MimicClass) -> Self {
        Self {
            state: Arc::new(NullState {
                class,
                accessors: OnceCell::new(),
            }),
            instance: OnceCell::new(),
        }
    }

    /// The shared class-level declaration
    pub fn class(&self) -> &MimicClass {
        &self.state.class
    }

    /// The singleton record, synthesizing accessors on first access with a table
    pub fn instance(&self) -> NullResult<Arc<NullRecord>> {
        let record = self
            .instance
            .get_or_init(|| {
                Arc::new(NullRecord {
                    state: Arc::clone(&self.state),
                    associations: AssociationCache::new(),
                })
            })
            .clone();

        self.state.initialize()?;
        Ok(record)
    }

    /// Whether accessors have been synthesized
    pub fn is_initialized(&self) -> bool {
        self.state.accessors.get().is_some()
    }

    pub fn table_name(&self) -> String {
        self.class().table_name()
    }

    pub fn primary_key(&self) -> &str {
        self.class().primary_key()
    }

    pub fn has_query_constraints(&self) -> bool {
        self.class().has_query_constraints()
    }

    pub fn composite_primary_key(&self) -> bool {
        self.class().composite_primary_key()
    }
}

/// The singleton Null record of a model
#[derive(Debug)]
pub struct NullRecord {
    state: Arc<NullState>,
    associations: AssociationCache,
}

impl NullObject for NullRecord {
    fn is_null(&self) -> bool {
        true
    }
}

impl Mimic for NullRecord {
    fn class(&self) -> &MimicClass {
        &self.state.class
    }

    fn accessors(&self) -> Option<&AccessorTable> {
        self.state.accessors.get()
    }

    fn association_cache(&self) -> &AssociationCache {
        &self.associations
    }

    fn as_mimic(&self) -> &dyn Mimic {
        self
    }
}
