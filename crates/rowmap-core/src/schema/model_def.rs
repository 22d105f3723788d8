use super::{Field, Model, Templates};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

/// A record type as the application declares it: a name, an optional table
/// name and the fields in declaration order.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Name of the record type
    pub name: String,

    /// Table override. When `None`, the table is named after the model.
    pub table_name: Option<String>,

    /// Declared fields, in order
    pub fields: Vec<(String, Field)>,
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> ModelDef {
        ModelDef {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    /// Maps the model to an explicitly named table.
    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Declares the next field.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Checks the declaration and resolves it into model metadata.
    ///
    /// The returned model has empty [`Templates`]; rendering them is the
    /// registrar's job.
    pub fn verify(self) -> Result<Model> {
        let ModelDef {
            name,
            table_name,
            fields: declared,
        } = self;

        let mut primary_key = None;
        let mut fields = vec![];
        let mut mappings = IndexMap::with_capacity(declared.len());
        let mut columns = HashSet::new();

        for (field_name, mut field) in declared {
            if mappings.contains_key(&field_name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{field_name}`; model={name}"
                )));
            }

            let column = field.name.get_or_insert_with(|| field_name.clone());

            if !columns.insert(column.clone()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{column}`; model={name}"
                )));
            }

            if field.primary_key {
                if !field.ty.can_be_primary_key() {
                    return Err(Error::invalid_schema(format!(
                        "{} `{field_name}` cannot be a primary key; model={name}",
                        field.ty.variant_name()
                    )));
                }

                if primary_key.is_some() {
                    return Err(Error::invalid_schema(format!(
                        "duplicate primary key for field: {field_name}; model={name}"
                    )));
                }

                primary_key = Some(field_name.clone());
            } else {
                fields.push(field_name.clone());
            }

            mappings.insert(field_name, field);
        }

        let Some(primary_key) = primary_key else {
            return Err(Error::invalid_schema(format!(
                "primary key not found; model={name}"
            )));
        };

        // Updates need at least one column to set
        if fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "no fields besides the primary key; model={name}"
            )));
        }

        Ok(Model {
            table_name: table_name.unwrap_or_else(|| name.clone()),
            name,
            primary_key,
            fields,
            mappings,
            templates: Templates::default(),
        })
    }
}
