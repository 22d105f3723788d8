pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::async_trait;

use std::fmt::Debug;

/// Opens connections to a database.
///
/// The pool calls [`Driver::connect`] each time it needs a new connection.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Maximum number of connections the driver supports, if it has a limit
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single open connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
