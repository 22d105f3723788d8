#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod create_table;
mod select;
mod statement;

use crate::stmt::{Select, Statement};

use rowmap_core::schema::{Model, Templates};

/// Serialize a statement against one model to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Model whose table the statement targets
    model: &'a Model,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// Renders the four statement templates of the model.
    pub fn templates(&self) -> Templates {
        Templates {
            select: self.serialize_template(&Select::model().into()),
            insert: self.serialize_template(&Statement::insert()),
            update: self.serialize_template(&Statement::update()),
            delete: self.serialize_template(&Statement::delete()),
        }
    }

    /// Serializes a statement that binds no parameters of its own.
    pub fn serialize_template(&self, stmt: &Statement) -> String {
        let mut params = Vec::new();
        let sql = self.serialize(stmt, &mut params);

        debug_assert!(
            params.is_empty(),
            "template statements shouldn't involve any parameters"
        );

        sql
    }

    fn table_name(&self) -> Ident<&str> {
        Ident(&self.model.table_name)
    }

    fn primary_key(&self) -> Ident<&str> {
        Ident(self.model.primary_key_column())
    }

    /// Non-key columns, as declared.
    fn columns(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.model.columns()
    }
}
