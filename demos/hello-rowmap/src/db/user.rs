use rowmap::{
    schema::{BooleanField, FloatField, ModelDef, StringField},
    Model,
};

pub struct User;

impl Model for User {
    const NAME: &'static str = "User";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("users")
            .field(
                "id",
                StringField::ddl("varchar(50)")
                    .primary_key()
                    .default_with(super::next_id),
            )
            .field("email", StringField::ddl("varchar(50)"))
            .field("passwd", StringField::ddl("varchar(50)"))
            .field("admin", BooleanField::new())
            .field("name", StringField::ddl("varchar(50)"))
            .field("image", StringField::ddl("varchar(500)"))
            .field("created_at", FloatField::new().default_with(super::now))
    }
}
