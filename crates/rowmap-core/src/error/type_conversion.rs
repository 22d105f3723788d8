use super::Error;
use crate::stmt::Value;

/// Error when a value cannot be converted to the requested type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    /// Variant name, or the offending value when it is not a [`Value`] yet
    from: String,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::type_conversion_from(value.variant_name(), to_type)
    }

    /// Creates a type conversion error for a Rust value that has no [`Value`]
    /// representation.
    pub fn type_conversion_from(from: impl core::fmt::Display, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from: from.to_string(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
