use crate::{Db, Result};

use rowmap_core::stmt::Value;
use rowmap_sql::{stmt::Select, Serializer};

/// Column alias of the selected expression.
const NUM: &str = "_num_";

/// Selects a single value computed over a model's table, such as
/// `count(id)`.
#[derive(Debug, Clone)]
pub struct FindNumber {
    model: String,
    expr: String,
    filter: Option<(String, Vec<Value>)>,
}

impl FindNumber {
    pub fn new(model: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            expr: expr.into(),
            filter: None,
        }
    }

    /// Appends `where <clause>`, binding `args` to its `?` placeholders.
    pub fn filter<T: Into<Value>>(
        mut self,
        clause: impl Into<String>,
        args: impl IntoIterator<Item = T>,
    ) -> Self {
        self.filter = Some((clause.into(), args.into_iter().map(Into::into).collect()));
        self
    }

    pub fn statement(&self) -> Result<Select> {
        let mut select = Select::number(self.expr.clone());

        if let Some(filter) = super::find_all::filter(&self.filter)? {
            select = select.filter(filter);
        }

        Ok(select)
    }

    /// Returns the selected value, or `None` when there is no row or the
    /// value is `NULL`.
    pub async fn exec(self, db: &Db) -> Result<Option<Value>> {
        let select = self.statement()?;
        let model = db.model(&self.model)?;

        let mut args = vec![];
        let sql = Serializer::new(&model).serialize(&select.into(), &mut args);

        let mut rows = db.select(&sql, args, Some(1)).await?;

        Ok(rows
            .first_mut()
            .and_then(|row| row.take(NUM))
            .filter(|value| !value.is_null()))
    }
}
