use super::Error;

/// Error when a write touched a different number of rows than expected.
///
/// `save`, `update` and `remove` each address exactly one row. Any other
/// affected-row count means the record vanished, the key did not match, or
/// the insert silently did nothing.
#[derive(Debug)]
pub(super) struct PersistenceError {
    operation: Box<str>,
    expected: u64,
    actual: u64,
}

impl std::error::Error for PersistenceError {}

impl core::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}: affected rows: {} (expected {})",
            self.operation, self.actual, self.expected
        )
    }
}

impl Error {
    /// Creates a persistence error for an affected-row-count mismatch.
    pub fn persistence(operation: impl Into<String>, expected: u64, actual: u64) -> Error {
        Error::from(super::ErrorKind::Persistence(PersistenceError {
            operation: operation.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a persistence error.
    pub fn is_persistence(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Persistence(_))
    }
}
