//! Stand-in Registry - Where models, their Null classes and their Void classes live
//!
//! Defining a Null or Void for a model registers the model and its stand-in
//! class without reading the model's schema. Records look the registry up
//! again when they resolve associations: a to-many association needs the
//! target model's table, a to-one association needs the target's Null record.

use std::sync::{Arc, Weak};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::config::NullConfig;
use crate::error::{NullError, NullResult};
use crate::mimic::{Assignments, Body, Member, MimicClass};
use crate::model::{ModelDescriptor, RecordType};
use crate::null::{NullClass, NullRecord};
use crate::relationships::{Association, EmptyRelation};
use crate::void::{Overrides, VoidClass, VoidRecord};

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    let config = NullConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("Invalid stand-in configuration, using defaults: {}", err);
        NullConfig::default()
    });
    Registry::with_config(config)
});

#[derive(Debug)]
pub(crate) struct RegistryInner {
    config: NullConfig,
    models: DashMap<String, Arc<dyn ModelDescriptor>>,
    nulls: DashMap<String, Arc<NullClass>>,
    voids: DashMap<String, Arc<VoidClass>>,
}

/// Thread-safe registry of models and their stand-in classes
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(NullConfig::default())
    }

    pub fn with_config(config: NullConfig) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                config,
                models: DashMap::new(),
                nulls: DashMap::new(),
                voids: DashMap::new(),
            }),
        }
    }

    /// The process-wide registry, configured from the environment
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub(crate) fn upgrade(weak: &Weak<RegistryInner>) -> NullResult<Self> {
        weak.upgrade()
            .map(|inner| Self { inner })
            .ok_or(NullError::RegistryDropped)
    }

    pub fn config(&self) -> &NullConfig {
        &self.inner.config
    }

    /// Register a model so associations can resolve to it
    pub fn register_model(&self, model: Arc<dyn ModelDescriptor>) {
        self.inner
            .models
            .insert(model.model_name().to_string(), model);
    }

    /// Get a registered model by name
    pub fn model(&self, name: &str) -> NullResult<Arc<dyn ModelDescriptor>> {
        self.inner
            .models
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| NullError::UnknownModel(name.to_string()))
    }

    /// Define the Null class of a model. Never reads the model's schema.
    pub fn define_null(
        &self,
        model: Arc<dyn ModelDescriptor>,
        assignments: Assignments,
        body: Body,
    ) -> NullResult<Arc<NullClass>> {
        let name = model.model_name().to_string();
        let class = MimicClass::new(
            Arc::clone(&model),
            RecordType::null(name.as_str()),
            assignments,
            body,
            Arc::downgrade(&self.inner),
        );
        let null_class = Arc::new(NullClass::new(class));

        self.insert_unique(&self.inner.nulls, &name, "Null", Arc::clone(&null_class))?;
        self.register_model(model);
        tracing::debug!("Defined {}::Null", name);

        Ok(null_class)
    }

    /// Define the Void class of a model. Never reads the model's schema.
    pub fn define_void(
        &self,
        model: Arc<dyn ModelDescriptor>,
        assignments: Assignments,
        body: Body,
    ) -> NullResult<Arc<VoidClass>> {
        let name = model.model_name().to_string();
        let class = MimicClass::new(
            Arc::clone(&model),
            RecordType::void(name.as_str()),
            assignments,
            body,
            Arc::downgrade(&self.inner),
        );
        let void_class = Arc::new(VoidClass::new(class, self.inner.config.strict_overrides));

        self.insert_unique(&self.inner.voids, &name, "Void", Arc::clone(&void_class))?;
        self.register_model(model);
        tracing::debug!("Defined {}::Void", name);

        Ok(void_class)
    }

    /// Insert a stand-in class, rejecting a second one for the same model
    /// unless redefinition is allowed. Check and insert share the shard lock.
    fn insert_unique<T>(
        &self,
        classes: &DashMap<String, Arc<T>>,
        name: &str,
        kind: &str,
        class: Arc<T>,
    ) -> NullResult<()> {
        match classes.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                if !self.inner.config.allow_redefinition {
                    return Err(NullError::DuplicateDefinition {
                        model: name.to_string(),
                        kind: kind.to_string(),
                    });
                }
                entry.insert(class);
                tracing::warn!("Redefined {}::{}", name, kind);
            }
            Entry::Vacant(entry) => {
                entry.insert(class);
            }
        }
        Ok(())
    }

    pub fn null_class(&self, name: &str) -> Option<Arc<NullClass>> {
        self.inner.nulls.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn void_class(&self, name: &str) -> Option<Arc<VoidClass>> {
        self.inner.voids.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// The singleton Null record of a model
    pub fn null(&self, name: &str) -> NullResult<Arc<NullRecord>> {
        self.null_class(name)
            .ok_or_else(|| NullError::MissingNullClass(name.to_string()))?
            .instance()
    }

    /// A fresh Void record of a model
    pub fn void(&self, name: &str, overrides: Overrides) -> NullResult<VoidRecord> {
        self.void_class(name)
            .ok_or_else(|| NullError::MissingVoidClass(name.to_string()))?
            .void(overrides)
    }

    /// The stand-in value of an association: empty relation or target Null record
    pub(crate) fn resolve_association(&self, association: &Association) -> NullResult<Member> {
        if association.is_collection() {
            let target = self.model(&association.target)?;
            Ok(Member::Relation(EmptyRelation::none(
                target.model_name(),
                target.table_name(),
            )))
        } else {
            Ok(Member::Record(self.null(&association.target)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mimic::Mimic;
    use crate::model::StaticModel;

    #[test]
    fn test_define_does_not_read_schema() {
        let registry = Registry::new();
        let model = Arc::new(StaticModel::new("User").attributes(["id", "name"]));

        registry
            .define_null(model.clone(), Assignments::new(), Body::new())
            .unwrap();
        registry
            .define_void(model.clone(), Assignments::new(), Body::new())
            .unwrap();

        assert_eq!(model.schema_reads(), 0);
        assert!(registry.model("User").is_ok());
    }

    #[test]
    fn test_duplicate_definition() {
        let registry = Registry::new();
        let model = Arc::new(StaticModel::new("User"));

        registry.define_null(model.clone(), Assignments::new(), Body::new()).unwrap();
        let err = registry
            .define_null(model, Assignments::new(), Body::new())
            .unwrap_err();

        assert_eq!(
            err,
            NullError::DuplicateDefinition {
                model: "User".to_string(),
                kind: "Null".to_string(),
            }
        );
    }

    #[test]
    fn test_concurrent_definitions_keep_one_class() {
        use std::sync::Barrier;
        use std::thread;

        let registry = Registry::new();
        let barrier = Arc::new(Barrier::new(4));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let model = Arc::new(StaticModel::new("User").attributes(["id"]));
                    barrier.wait();
                    registry.define_null(model, Assignments::new(), Body::new())
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let defined: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();

        assert_eq!(defined.len(), 1);
        assert!(results.iter().filter(|r| r.is_err()).all(|r| matches!(
            r,
            Err(NullError::DuplicateDefinition { .. })
        )));
        assert!(Arc::ptr_eq(defined[0], &registry.null_class("User").unwrap()));
    }

    #[test]
    fn test_redefinition_when_allowed() {
        let registry = Registry::with_config(NullConfig::new().with_allow_redefinition(true));
        let model = Arc::new(StaticModel::new("User").attributes(["name"]));

        registry
            .define_null(model.clone(), Assignments::new().assign(["name"], "First"), Body::new())
            .unwrap();
        registry
            .define_null(model, Assignments::new().assign(["name"], "Second"), Body::new())
            .unwrap();

        let record = registry.null("User").unwrap();
        assert_eq!(record.read("name"), "Second");
    }

    #[test]
    fn test_missing_classes() {
        let registry = Registry::new();

        assert_eq!(
            registry.null("Ghost").unwrap_err(),
            NullError::MissingNullClass("Ghost".to_string())
        );
        assert!(matches!(
            registry.void("Ghost", Overrides::new()),
            Err(NullError::MissingVoidClass(_))
        ));
        assert!(matches!(registry.model("Ghost"), Err(NullError::UnknownModel(_))));
    }

    #[test]
    fn test_dropped_registry() {
        let model = Arc::new(StaticModel::new("User").belongs_to("business", "Business"));
        let record = {
            let registry = Registry::new();
            registry.define_null(model, Assignments::new(), Body::new()).unwrap();
            registry.null("User").unwrap()
        };

        assert_eq!(
            record.association("business").unwrap_err(),
            NullError::RegistryDropped
        );
    }
}
