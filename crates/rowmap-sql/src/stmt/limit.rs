/// A `limit` clause. Both values are bound as statement arguments and are
/// expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Rows to skip
    pub offset: Option<i64>,

    /// Maximum number of rows to return
    pub count: i64,
}

impl Limit {
    pub fn new(count: i64) -> Self {
        Self {
            offset: None,
            count,
        }
    }

    pub fn with_offset(offset: i64, count: i64) -> Self {
        Self {
            offset: Some(offset),
            count,
        }
    }
}
