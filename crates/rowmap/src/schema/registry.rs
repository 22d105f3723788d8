use super::{Model, ModelDef};
use crate::{Error, Result};

use indexmap::IndexMap;
use rowmap_sql::Serializer;
use std::sync::Arc;
use tracing::debug;

/// Verified model metadata, keyed by model name.
///
/// Each model is verified and its templates rendered once. Registering the
/// same declaration again hands back the cached metadata; a different
/// declaration under a registered name is rejected.
#[derive(Debug, Default)]
pub struct Registry {
    models: IndexMap<String, Arc<Model>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: ModelDef) -> Result<Arc<Model>> {
        let mut model = def.verify()?;

        if let Some(cached) = self.models.get(&model.name) {
            if !cached.same_layout(&model) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is already registered with a different declaration",
                    model.name
                )));
            }

            return Ok(cached.clone());
        }

        model.templates = Serializer::new(&model).templates();

        debug!("found model: {} (table: {})", model.name, model.table_name);
        for (name, field) in &model.mappings {
            debug!("  found mapping: {name} ==> {field}");
        }

        let model = Arc::new(model);
        self.models.insert(model.name.clone(), model.clone());
        Ok(model)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Model>> {
        self.models.get(name)
    }

    /// Like [`Registry::get`], but a missing model is an error.
    pub fn model(&self, name: &str) -> Result<Arc<Model>> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| Error::invalid_schema(format!("model `{name}` is not registered")))
    }

    /// Registered models, in registration order.
    pub fn models(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
