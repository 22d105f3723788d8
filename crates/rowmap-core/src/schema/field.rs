mod default;
pub use default::FieldDefault;

mod ty;
pub use ty::{BooleanField, FieldTy, FloatField, IntegerField, StringField, TextField};

use crate::stmt::Value;
use std::fmt;

/// Describes one mapped column.
///
/// Fields are built with the type constructors ([`StringField::new`],
/// [`IntegerField::new`], ...) and refined with the builder methods below.
/// Nothing is validated here; the registrar rejects invalid combinations when
/// the model is registered.
#[derive(Debug, Clone)]
pub struct Field {
    /// Column name. When `None`, the declared field name is used.
    pub name: Option<String>,

    /// The column type
    pub ty: FieldTy,

    /// True if the field is the primary key
    pub primary_key: bool,

    /// Value used by `save` when the field is unset
    pub default: Option<FieldDefault>,
}

impl Field {
    /// Creates a field of the given type, with the type's default value.
    pub fn new(ty: FieldTy) -> Field {
        let default = ty.default_value().map(FieldDefault::Value);

        Field {
            name: None,
            ty,
            primary_key: false,
            default,
        }
    }

    /// Marks the field as the model's primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Stores the field under a different column name.
    pub fn name(mut self, column: impl Into<String>) -> Self {
        self.name = Some(column.into());
        self
    }

    /// Uses `value` when the field is unset on save.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(FieldDefault::Value(value.into()));
        self
    }

    /// Calls `producer` for a fresh value each time the field is unset on save.
    pub fn default_with<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(FieldDefault::producer(producer));
        self
    }

    /// Removes the type's default value.
    pub fn no_default(mut self) -> Self {
        self.default = None;
        self
    }

    pub fn column_type(&self) -> &str {
        self.ty.column_type()
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Column name, if one was set or resolved at registration.
    pub fn column_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Resolves the default, invoking the producer if there is one.
    pub fn resolve_default(&self) -> Option<Value> {
        self.default.as_ref().map(FieldDefault::resolve)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {}:{}>",
            self.ty.variant_name(),
            self.column_type(),
            self.name.as_deref().unwrap_or("?")
        )
    }
}
