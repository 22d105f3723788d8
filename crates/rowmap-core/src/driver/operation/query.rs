use super::Operation;
use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// SQL text with `?` placeholders
    pub sql: String,

    /// Positional arguments, one per placeholder
    pub args: Vec<Value>,

    /// Maximum number of rows to return; `None` returns all of them
    pub size: Option<usize>,
}

impl From<Query> for Operation {
    fn from(value: Query) -> Operation {
        Operation::Query(value)
    }
}
