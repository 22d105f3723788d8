use super::Error;

/// Error when a record is accessed through a field its model does not declare.
#[derive(Debug)]
pub(super) struct UnknownField {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnknownField {}

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field `{}` on model `{}`", self.field, self.model)
    }
}

impl Error {
    /// Creates an unknown field error.
    pub fn unknown_field(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownField {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
