use super::{Comma, Formatter, Params, Placeholder, ToSql};

use crate::stmt::Statement;

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let serializer = f.serializer;
        let table = serializer.table_name();
        let pk = serializer.primary_key();

        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert => {
                let columns = serializer.columns().map(|column| (column, ", "));
                let placeholders =
                    Comma((0..=serializer.model.fields.len()).map(|_| Placeholder));

                fmt!(f, "insert into " table " (");
                for (column, delim) in columns {
                    fmt!(f, column delim);
                }
                fmt!(f, pk ") values (" placeholders ")");
            }
            Statement::Update => {
                let assignments = Comma(serializer.columns().map(Assign));
                fmt!(f, "update " table " set " assignments " where " pk "=" Placeholder);
            }
            Statement::Delete => {
                fmt!(f, "delete from " table " where " pk "=" Placeholder);
            }
            Statement::CreateTable => serializer.model.to_sql(f),
            Statement::DropTable(stmt) => {
                let if_exists = if stmt.if_exists { "if exists " } else { "" };
                fmt!(f, "drop table " if_exists table);
            }
        }
    }
}

/// `column=?`
struct Assign<'a>(&'a str);

impl ToSql for Assign<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.0 "=" Placeholder);
    }
}
