mod execute;
pub use execute::Execute;

mod query;
pub use query::Query;

mod transaction;
pub use transaction::Transaction;

/// A unit of work handed to a [`Connection`](super::Connection).
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a statement that returns rows
    Query(Query),

    /// Run a statement that returns an affected-row count
    Execute(Execute),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),
}

impl Operation {
    /// The SQL text, for statement-carrying operations.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Query(op) => Some(&op.sql),
            Self::Execute(op) => Some(&op.sql),
            Self::Transaction(_) => None,
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub fn is_execute(&self) -> bool {
        matches!(self, Self::Execute(_))
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }
}
