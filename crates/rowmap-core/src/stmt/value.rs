use crate::{Error, Result};

use serde::Serialize;
use std::fmt;

/// A single SQL value, either bound as a statement argument or read back from
/// a result row.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw bytes, for binary columns
    Bytes(Vec<u8>),

    /// Double precision float
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in conversion errors.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            Self::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Self::F64(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Null => f.write_str("NULL"),
            Self::String(v) => write!(f, "'{v}'"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

macro_rules! impl_from_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::I64(src.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_unsigned {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<$ty> for Value {
                type Error = Error;

                fn try_from(src: $ty) -> Result<Self> {
                    i64::try_from(src)
                        .map(Self::I64)
                        .map_err(|_| Error::type_conversion_from(src, "I64"))
                }
            }
        )*
    };
}

// Values above `i64::MAX` have no column type to go to
impl_try_from_unsigned!(u64, usize);

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(0) => Ok(false),
            Value::I64(1) => Ok(true),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(value, "i32")),
            _ => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => u64::try_from(v).map_err(|_| Error::type_conversion(value, "u64")),
            _ => Err(Error::type_conversion(value, "u64")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

macro_rules! impl_try_from_nullable {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for Option<$ty> {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::Null => Ok(None),
                        value => <$ty>::try_from(value).map(Some),
                    }
                }
            }
        )*
    };
}

impl_try_from_nullable!(bool, i32, i64, u64, f64, String, Vec<u8>);
