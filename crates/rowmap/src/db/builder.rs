use super::{Db, Pool, Shared};
use crate::{
    driver::Driver,
    schema::{ModelDef, Registry},
    Config, Error, Model, Result,
};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Declarations waiting to be verified, with the name the registering
    /// type expects, if any
    models: Vec<(ModelDef, Option<&'static str>)>,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push((T::schema(), Some(T::NAME)));
        self
    }

    /// Registers a declaration that has no Rust type behind it.
    pub fn register_def(&mut self, def: ModelDef) -> &mut Self {
        self.models.push((def, None));
        self
    }

    /// Verifies every registered declaration and renders its templates.
    pub fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::new();

        for (def, expected) in &self.models {
            if let Some(expected) = expected {
                if def.name != *expected {
                    return Err(Error::invalid_schema(format!(
                        "model `{expected}` declares its schema as `{}`",
                        def.name
                    )));
                }
            }

            registry.register(def.clone())?;
        }

        Ok(registry)
    }

    /// Connects to MySQL with the given settings.
    #[cfg(feature = "mysql")]
    pub async fn connect(&mut self, config: Config) -> Result<Db> {
        let driver = crate::driver::MySQL::new(&config)?;
        self.build(config, driver).await
    }

    pub async fn build(&mut self, config: Config, driver: impl Driver) -> Result<Db> {
        config.validate()?;

        let registry = self.build_registry()?;
        let pool = Pool::new(driver, &config).await?;

        Ok(Db {
            shared: Arc::new(Shared {
                registry,
                pool,
                autocommit: config.autocommit,
            }),
        })
    }
}
