//! Models shared by the integration tests.

use rowmap::{
    schema::{BooleanField, FloatField, IntegerField, ModelDef, StringField, TextField},
    stmt::Value,
    Model,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// A 50 character id: the creation time in milliseconds, a random uuid and
/// a `000` suffix. Ids created later sort after earlier ones.
pub fn next_id() -> Value {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    Value::String(format!("{millis:015}{}000", uuid::Uuid::new_v4().simple()))
}

/// Seconds since the epoch, as a float.
pub fn now() -> Value {
    Value::F64(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64(),
    )
}

fn id() -> rowmap::schema::Field {
    StringField::ddl("varchar(50)")
        .primary_key()
        .default_with(next_id)
}

pub struct User;

impl Model for User {
    const NAME: &'static str = "User";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("users")
            .field("id", id())
            .field("email", StringField::ddl("varchar(50)"))
            .field("passwd", StringField::ddl("varchar(50)"))
            .field("admin", BooleanField::new())
            .field("name", StringField::ddl("varchar(50)"))
            .field("image", StringField::ddl("varchar(500)"))
            .field("created_at", FloatField::new().default_with(now))
    }
}

pub struct Blog;

impl Model for Blog {
    const NAME: &'static str = "Blog";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("blogs")
            .field("id", id())
            .field("user_id", StringField::ddl("varchar(50)"))
            .field("user_name", StringField::ddl("varchar(50)"))
            .field("user_image", StringField::ddl("varchar(500)"))
            .field("name", StringField::ddl("varchar(50)"))
            .field("summary", StringField::ddl("varchar(200)"))
            .field("content", TextField::new())
            .field("created_at", FloatField::new().default_with(now))
    }
}

pub struct Comment;

impl Model for Comment {
    const NAME: &'static str = "Comment";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("comments")
            .field("id", id())
            .field("blog_id", StringField::ddl("varchar(50)"))
            .field("user_id", StringField::ddl("varchar(50)"))
            .field("user_name", StringField::ddl("varchar(50)"))
            .field("user_image", StringField::ddl("varchar(500)"))
            .field("content", TextField::new())
            .field("created_at", FloatField::new().default_with(now))
    }
}

/// A model with an integer key and one field of every scalar type.
pub struct Item;

impl Model for Item {
    const NAME: &'static str = "Item";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .field("id", IntegerField::new().primary_key())
            .field("name", StringField::new())
            .field("price", FloatField::new())
            .field("qty", IntegerField::new().name("quantity"))
            .field("active", BooleanField::new())
    }
}
