use super::IntoLimit;
use crate::{Db, Record, Result};

use rowmap_core::stmt::Value;
use rowmap_sql::{
    stmt::{Filter, Limit, Select},
    Serializer,
};

/// Selects the records of a model.
///
/// Argument errors (a bad limit, a `where` clause whose placeholders don't
/// match its arguments) are reported by [`FindAll::exec`] before anything is
/// sent to the database.
#[derive(Debug, Clone)]
pub struct FindAll {
    model: String,
    filter: Option<(String, Vec<Value>)>,
    order_by: Option<String>,
    limit: Option<Result<Limit>>,
}

impl FindAll {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            filter: None,
            order_by: None,
            limit: None,
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

    /// Appends `order by <clause>`.
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by = Some(clause.into());
        self
    }

    pub fn limit(mut self, limit: impl IntoLimit) -> Self {
        self.limit = Some(limit.into_limit());
        self
    }

    /// The statement this finder runs.
    pub fn statement(&self) -> Result<Select> {
        let mut select = Select::model();

        if let Some(filter) = filter(&self.filter)? {
            select = select.filter(filter);
        }

        if let Some(order_by) = &self.order_by {
            select = select.order_by(order_by.clone());
        }

        if let Some(limit) = self.limit.clone().transpose()? {
            select = select.limit(limit);
        }

        Ok(select)
    }

    pub async fn exec(self, db: &Db) -> Result<Vec<Record>> {
        let select = self.statement()?;
        let model = db.model(&self.model)?;

        let mut args = vec![];
        let sql = Serializer::new(&model).serialize(&select.into(), &mut args);

        db.select(&sql, args, None)
            .await?
            .into_iter()
            .map(|row| Record::from_row(model.clone(), row))
            .collect()
    }
}

pub(super) fn filter(filter: &Option<(String, Vec<Value>)>) -> Result<Option<Filter>> {
    filter
        .as_ref()
        .map(|(clause, args)| Filter::sql(clause.clone(), args.clone()))
        .transpose()
}
