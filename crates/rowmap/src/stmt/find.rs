use crate::{Db, Record, Result};

use rowmap_core::stmt::Value;
use rowmap_sql::{
    stmt::{Filter, Select},
    Serializer,
};

/// Finds one record by primary key.
#[derive(Debug, Clone)]
pub struct Find {
    model: String,
    primary_key: Value,
}

impl Find {
    pub fn new(model: impl Into<String>, primary_key: impl Into<Value>) -> Self {
        Self {
            model: model.into(),
            primary_key: primary_key.into(),
        }
    }

    pub fn statement(&self) -> Select {
        Select::model().filter(Filter::primary_key(self.primary_key.clone()))
    }

    pub async fn exec(self, db: &Db) -> Result<Option<Record>> {
        let model = db.model(&self.model)?;

        let mut args = vec![];
        let sql = Serializer::new(&model).serialize(&self.statement().into(), &mut args);

        let rows = db.select(&sql, args, Some(1)).await?;

        rows.into_iter()
            .next()
            .map(|row| Record::from_row(model, row))
            .transpose()
    }
}
