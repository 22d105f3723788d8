use super::Error;

/// Error when a statement is issued against a pool that does not exist.
///
/// The pool is created when a `Db` is built and destroyed by `Db::close`;
/// using the handle afterwards is a programming error.
#[derive(Debug)]
pub(super) struct PoolNotInitialized;

impl std::error::Error for PoolNotInitialized {}

impl core::fmt::Display for PoolNotInitialized {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection pool is not initialized or has been closed")
    }
}

impl Error {
    /// Creates a pool-not-initialized error.
    pub fn pool_not_initialized() -> Error {
        Error::from(super::ErrorKind::PoolNotInitialized(PoolNotInitialized))
    }

    /// Returns `true` if this error is a pool-not-initialized error.
    pub fn is_pool_not_initialized(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PoolNotInitialized(_))
    }
}
