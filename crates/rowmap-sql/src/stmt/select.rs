use super::{Filter, Limit};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// What the statement selects
    pub returning: Returning,

    /// Optional `where` clause
    pub filter: Option<Filter>,

    /// Optional `order by` clause, copied verbatim
    pub order_by: Option<String>,

    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// The primary key followed by every other column
    Model,

    /// A single expression, aliased as `_num_`
    Number(String),
}

impl Select {
    /// Selects full rows of the model.
    pub fn model() -> Self {
        Self {
            returning: Returning::Model,
            filter: None,
            order_by: None,
            limit: None,
        }
    }

    /// Selects one expression, e.g. `count(id)`.
    pub fn number(expr: impl Into<String>) -> Self {
        Self {
            returning: Returning::Number(expr.into()),
            filter: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }
}
