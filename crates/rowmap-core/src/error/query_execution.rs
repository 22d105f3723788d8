use super::Error;

/// Error when executing a write statement fails.
///
/// Always used as context around the underlying failure, so the original
/// error stays reachable through [`Error::cause`] and `source()`.
#[derive(Debug)]
pub(super) struct QueryExecution {
    sql: Box<str>,
}

impl std::error::Error for QueryExecution {}

impl core::fmt::Display for QueryExecution {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "query execution failed: {}", self.sql)
    }
}

impl Error {
    /// Creates a query execution error for the given statement.
    ///
    /// Attach it to the original failure with [`Error::context`].
    pub fn query_execution(sql: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QueryExecution(QueryExecution {
            sql: sql.into().into(),
        }))
    }

    /// Returns `true` if this error is a query execution error.
    pub fn is_query_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QueryExecution(_))
    }
}
