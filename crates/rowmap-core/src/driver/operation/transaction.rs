use super::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Start a transaction
    Start,

    /// Commit a transaction
    Commit,

    /// Rollback a transaction
    Rollback,
}

impl Transaction {
    /// The statement a SQL database runs for this op.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Start => "START TRANSACTION",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
        }
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Operation {
        Operation::Transaction(value)
    }
}
