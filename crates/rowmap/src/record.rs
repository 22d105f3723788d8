use crate::{schema::Model, Db, Error, Result};

use indexmap::IndexMap;
use rowmap_core::stmt::{Row, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;
use tracing::debug;

/// One row of a registered model, held in memory.
///
/// Values are keyed by field name. Only declared fields can be set. A field
/// that was never set reads as `NULL`.
#[derive(Debug, Clone)]
pub struct Record {
    model: Arc<Model>,
    values: IndexMap<String, Value>,
}

impl Record {
    pub fn new(model: Arc<Model>) -> Self {
        Self {
            model,
            values: IndexMap::new(),
        }
    }

    /// Builds a record from a row selected from the model's table.
    pub fn from_row(model: Arc<Model>, row: Row) -> Result<Self> {
        let mut values = IndexMap::with_capacity(row.len());

        for (column, value) in row {
            let Some(name) = model.field_for_column(&column) else {
                return Err(Error::unknown_field(&model.name, column));
            };

            let value = model.mappings[name].ty.coerce(value);
            values.insert(name.to_string(), value);
        }

        Ok(Self { model, values })
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// The value of a field, if it has been set.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// The value of a field, converted to `T`.
    pub fn get_as<T>(&self, field: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        self.check_field(field)?;
        T::try_from(self.value(field))
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.check_field(field)?;
        self.values.insert(field.to_string(), value.into());
        Ok(self)
    }

    /// Owned variant of [`Record::set`], for building records inline.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn primary_key(&self) -> Option<&Value> {
        self.values.get(&self.model.primary_key)
    }

    /// Set fields, in the order they were set.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Inserts the record. Unset fields take their default, which is also
    /// written back to the record.
    pub async fn save(&mut self, db: &Db) -> Result<()> {
        let model = self.model.clone();

        let mut args = model
            .fields
            .iter()
            .map(|field| self.value_or_default(field))
            .collect::<Vec<_>>();
        args.push(self.value_or_default(&model.primary_key));

        let rows = db.execute(&model.templates.insert, args, true).await?;
        if rows != 1 {
            return Err(Error::persistence("failed to insert record", 1, rows));
        }

        Ok(())
    }

    /// Writes every non-key field back, by primary key. Defaults are not
    /// applied.
    pub async fn update(&self, db: &Db) -> Result<()> {
        let mut args = self
            .model
            .fields
            .iter()
            .map(|field| self.value(field))
            .collect::<Vec<_>>();
        args.push(self.value(&self.model.primary_key));

        let rows = db.execute(&self.model.templates.update, args, true).await?;
        if rows != 1 {
            return Err(Error::persistence(
                "failed to update by primary key",
                1,
                rows,
            ));
        }

        Ok(())
    }

    /// Deletes the row with this record's primary key.
    pub async fn remove(&self, db: &Db) -> Result<()> {
        let args = vec![self.value(&self.model.primary_key)];

        let rows = db.execute(&self.model.templates.delete, args, true).await?;
        if rows != 1 {
            return Err(Error::persistence(
                "failed to remove by primary key",
                1,
                rows,
            ));
        }

        Ok(())
    }

    fn check_field(&self, field: &str) -> Result<()> {
        if self.model.mappings.contains_key(field) {
            Ok(())
        } else {
            Err(Error::unknown_field(&self.model.name, field))
        }
    }

    fn value(&self, field: &str) -> Value {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn value_or_default(&mut self, field: &str) -> Value {
        if let Some(value) = self.values.get(field).filter(|value| !value.is_null()) {
            return value.clone();
        }

        let Some(default) = self
            .model
            .mappings
            .get(field)
            .and_then(|field| field.resolve_default())
        else {
            return Value::Null;
        };

        debug!("using default value for {field}: {default}");
        self.values.insert(field.to_string(), default.clone());
        default
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.model.name == other.model.name && self.values == other.values
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;

        // Declaration order, not the order fields were set in
        for name in self.model.mappings.keys() {
            if let Some(value) = self.values.get(name) {
                map.serialize_entry(name, value)?;
            }
        }

        map.end()
    }
}
