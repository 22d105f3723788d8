use super::Field;

use indexmap::IndexMap;

/// Metadata for one registered record type.
///
/// Produced once per type by the registrar and shared, immutable, by every
/// record of that type.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the record type
    pub name: String,

    /// Table the records are stored in
    pub table_name: String,

    /// Field name of the primary key
    pub primary_key: String,

    /// Non-key field names, in declaration order
    pub fields: Vec<String>,

    /// Every declared field, key included, by field name
    pub mappings: IndexMap<String, Field>,

    /// Precompiled statements
    pub templates: Templates,
}

/// The four statements generated for a model, with `?` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Templates {
    /// ``select `pk`, c1, c2 from `table` ``
    pub select: String,

    /// ``insert into `table` (c1, c2, `pk`) values (?, ?, ?)``
    pub insert: String,

    /// ``update `table` set c1=?, c2=? where `pk`=?``
    pub update: String,

    /// ``delete from `table` where `pk`=?``
    pub delete: String,
}

impl Model {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.mappings.get(name)
    }

    pub fn primary_key_field(&self) -> &Field {
        &self.mappings[&self.primary_key]
    }

    /// Column the given field is stored in.
    pub fn column_name<'a>(&'a self, field: &'a str) -> Option<&'a str> {
        self.mappings
            .get(field)
            .map(|f| f.column_name().unwrap_or(field))
    }

    pub fn primary_key_column(&self) -> &str {
        self.primary_key_field()
            .column_name()
            .unwrap_or(&self.primary_key)
    }

    /// Field stored in the given column.
    pub fn field_for_column(&self, column: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|(name, field)| field.column_name().unwrap_or(name) == column)
            .map(|(name, _)| name.as_str())
    }

    /// True if both models declare the same fields, columns and types in
    /// the same order. Defaults are not compared.
    pub fn same_layout(&self, other: &Model) -> bool {
        self.name == other.name
            && self.table_name == other.table_name
            && self.primary_key == other.primary_key
            && self.mappings.len() == other.mappings.len()
            && self
                .mappings
                .iter()
                .zip(&other.mappings)
                .all(|((name, field), (other_name, other_field))| {
                    name == other_name
                        && field.name == other_field.name
                        && field.ty == other_field.ty
                        && field.primary_key == other_field.primary_key
                })
    }

    /// Column names of the non-key fields, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields
            .iter()
            .map(|name| self.column_name(name).unwrap_or(name))
    }
}
