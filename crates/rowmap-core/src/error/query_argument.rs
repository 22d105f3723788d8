use super::Error;

/// Error when query arguments are malformed.
///
/// Raised before anything is sent to the database, e.g. for a `limit` that
/// is neither a count nor an `(offset, count)` pair, or when the number of
/// arguments does not match the number of `?` placeholders.
#[derive(Debug)]
pub(super) struct QueryArgument {
    message: Box<str>,
}

impl std::error::Error for QueryArgument {}

impl core::fmt::Display for QueryArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query argument: {}", self.message)
    }
}

impl Error {
    /// Creates a query argument error.
    pub fn query_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QueryArgument(QueryArgument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a query argument error.
    pub fn is_query_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QueryArgument(_))
    }
}
