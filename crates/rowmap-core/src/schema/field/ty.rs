#![allow(clippy::new_ret_no_self)]

use super::Field;
use crate::stmt::Value;

/// The fixed set of column types a field can map to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTy {
    /// Short string, stored with the given DDL type (`varchar(100)` unless overridden)
    String { ddl: String },

    /// `boolean`
    Boolean,

    /// `bigint`
    Integer,

    /// `real`
    Float,

    /// `text`
    Text,
}

impl FieldTy {
    /// The SQL type literal used for the column.
    pub fn column_type(&self) -> &str {
        match self {
            Self::String { ddl } => ddl,
            Self::Boolean => "boolean",
            Self::Integer => "bigint",
            Self::Float => "real",
            Self::Text => "text",
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::String { .. } => "StringField",
            Self::Boolean => "BooleanField",
            Self::Integer => "IntegerField",
            Self::Float => "FloatField",
            Self::Text => "TextField",
        }
    }

    /// Booleans and long text cannot identify a row.
    pub fn can_be_primary_key(&self) -> bool {
        !matches!(self, Self::Boolean | Self::Text)
    }

    pub(super) fn default_value(&self) -> Option<Value> {
        match self {
            Self::String { .. } | Self::Text => None,
            Self::Boolean => Some(Value::Bool(false)),
            Self::Integer => Some(Value::I64(0)),
            Self::Float => Some(Value::F64(0.0)),
        }
    }

    /// Normalizes a value read from the database to this field's type.
    ///
    /// Drivers report what the wire protocol carried; MySQL, for example,
    /// returns `boolean` columns as integers and text as bytes.
    pub fn coerce(&self, value: Value) -> Value {
        match (self, value) {
            (Self::Boolean, Value::I64(v)) => Value::Bool(v != 0),
            (Self::Float, Value::I64(v)) => Value::F64(v as f64),
            (Self::String { .. } | Self::Text, Value::Bytes(bytes)) => {
                match String::from_utf8(bytes) {
                    Ok(s) => Value::String(s),
                    Err(err) => Value::Bytes(err.into_bytes()),
                }
            }
            (_, value) => value,
        }
    }
}

/// `varchar(100)` column, no default.
pub struct StringField;

impl StringField {
    pub fn new() -> Field {
        Self::ddl("varchar(100)")
    }

    /// A string column with a custom DDL type, e.g. `varchar(50)` or `char(36)`.
    pub fn ddl(ddl: impl Into<String>) -> Field {
        Field::new(FieldTy::String { ddl: ddl.into() })
    }
}

/// `boolean` column, defaults to `false`.
pub struct BooleanField;

impl BooleanField {
    pub fn new() -> Field {
        Field::new(FieldTy::Boolean)
    }
}

/// `bigint` column, defaults to `0`.
pub struct IntegerField;

impl IntegerField {
    pub fn new() -> Field {
        Field::new(FieldTy::Integer)
    }
}

/// `real` column, defaults to `0.0`.
pub struct FloatField;

impl FloatField {
    pub fn new() -> Field {
        Field::new(FieldTy::Float)
    }
}

/// `text` column, no default.
pub struct TextField;

impl TextField {
    pub fn new() -> Field {
        Field::new(FieldTy::Text)
    }
}
