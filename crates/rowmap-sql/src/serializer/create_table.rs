use super::{Comma, Formatter, Ident, Params, ToSql};

use rowmap_core::schema::{Field, Model};

impl ToSql for &Model {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = Comma(self.mappings.iter().map(ColumnDef::from));
        let pk = Ident(self.primary_key_column());

        fmt!(
            f, "create table if not exists " Ident(&self.table_name) " (" columns ", primary key (" pk "))"
        );
    }
}

struct ColumnDef<'a> {
    name: &'a str,
    field: &'a Field,
}

impl<'a> From<(&'a String, &'a Field)> for ColumnDef<'a> {
    fn from((name, field): (&'a String, &'a Field)) -> Self {
        ColumnDef {
            name: field.column_name().unwrap_or(name),
            field,
        }
    }
}

impl ToSql for ColumnDef<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let not_null = if self.field.is_primary_key() {
            " not null"
        } else {
            ""
        };

        fmt!(f, Ident(self.name) " " self.field.column_type() not_null);
    }
}
