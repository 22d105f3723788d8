use crate::stmt::Value;

use std::{fmt, sync::Arc};

/// Default for a field that is unset when a record is saved.
#[derive(Clone)]
pub enum FieldDefault {
    /// A fixed value
    Value(Value),

    /// Called for a fresh value every time
    Producer(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl FieldDefault {
    pub fn producer<F>(producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(producer))
    }

    pub fn resolve(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Producer(producer) => producer(),
        }
    }
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}
