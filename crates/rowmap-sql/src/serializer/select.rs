use super::{Formatter, Params, ToSql};

use crate::stmt::{Filter, Limit, Returning, Select};

use rowmap_core::stmt::Value;

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let serializer = f.serializer;
        let table = serializer.table_name();

        match &self.returning {
            Returning::Model => {
                fmt!(f, "select " serializer.primary_key());
                for column in serializer.columns() {
                    fmt!(f, ", " column);
                }
                fmt!(f, " from " table);
            }
            Returning::Number(expr) => {
                fmt!(f, "select " expr " _num_ from " table);
            }
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " where " filter);
        }

        if let Some(order_by) = &self.order_by {
            fmt!(f, " order by " order_by);
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " limit " limit);
        }
    }
}

impl ToSql for &Filter {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Filter::Sql { sql, args } => {
                // The clause carries its own placeholders
                f.dst.push_str(sql);
                for arg in args {
                    f.params.push(arg);
                }
            }
            Filter::PrimaryKey(value) => {
                let pk = f.serializer.primary_key();
                fmt!(f, pk "=" value);
            }
        }
    }
}

impl ToSql for &Limit {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let count = Value::I64(self.count);

        match self.offset.map(Value::I64) {
            Some(offset) => {
                let (offset, count) = (&offset, &count);
                fmt!(f, offset ", " count);
            }
            None => (&count).to_sql(f),
        }
    }
}
