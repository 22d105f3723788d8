use super::{Formatter, ToSql};

use rowmap_core::stmt::Value;

pub trait Params {
    fn push(&mut self, param: &Value);
}

/// A positional `?` placeholder.
pub struct Placeholder;

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) {
        self.push(value.clone());
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.params.push(self);
        Placeholder.to_sql(f);
    }
}
