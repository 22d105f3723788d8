use crate::{
    schema::ModelDef,
    stmt::{Find, FindAll, FindNumber},
    Db, Record, Result,
};

use rowmap_core::stmt::Value;

/// A record type known at compile time.
///
/// ```ignore
/// struct User;
///
/// impl Model for User {
///     const NAME: &'static str = "User";
///
///     fn schema() -> ModelDef {
///         ModelDef::new(Self::NAME)
///             .field("id", IntegerField::new().primary_key())
///             .field("name", StringField::new())
///     }
/// }
/// ```
pub trait Model {
    /// Name the model is registered under. Must match the name of
    /// [`Model::schema`].
    const NAME: &'static str;

    /// Declares the model's table and fields.
    fn schema() -> ModelDef;

    /// A new, empty record.
    fn record(db: &Db) -> Result<Record> {
        db.record(Self::NAME)
    }

    fn find_all() -> FindAll {
        FindAll::new(Self::NAME)
    }

    /// Selects a single expression, e.g. `count(id)`.
    fn find_number(expr: impl Into<String>) -> FindNumber {
        FindNumber::new(Self::NAME, expr)
    }

    /// Finds a record by primary key.
    fn find(primary_key: impl Into<Value>) -> Find {
        Find::new(Self::NAME, primary_key)
    }
}
