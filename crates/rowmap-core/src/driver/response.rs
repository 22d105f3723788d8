use crate::{err, stmt::Row, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by a query
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: impl Into<Vec<Row>>) -> Self {
        Self {
            rows: Rows::Values(values.into()),
        }
    }

    pub fn empty_values() -> Self {
        Self::values(vec![])
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            Self::Values(values) => Err(err!(
                "expected an affected-row count, got {} rows",
                values.len()
            )),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Self::Values(values) => Ok(values),
            Self::Count(count) => Err(err!("expected rows, got an affected-row count of {count}")),
        }
    }
}
