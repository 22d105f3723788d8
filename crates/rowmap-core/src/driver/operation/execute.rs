use super::Operation;
use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Execute {
    /// SQL text with `?` placeholders
    pub sql: String,

    /// Positional arguments, one per placeholder
    pub args: Vec<Value>,
}

impl From<Execute> for Operation {
    fn from(value: Execute) -> Operation {
        Operation::Execute(value)
    }
}
