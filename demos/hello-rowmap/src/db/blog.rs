use rowmap::{
    schema::{FloatField, ModelDef, StringField, TextField},
    Model,
};

pub struct Blog;

impl Model for Blog {
    const NAME: &'static str = "Blog";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("blogs")
            .field(
                "id",
                StringField::ddl("varchar(50)")
                    .primary_key()
                    .default_with(super::next_id),
            )
            .field("user_id", StringField::ddl("varchar(50)"))
            .field("user_name", StringField::ddl("varchar(50)"))
            .field("user_image", StringField::ddl("varchar(500)"))
            .field("name", StringField::ddl("varchar(50)"))
            .field("summary", StringField::ddl("varchar(200)"))
            .field("content", TextField::new())
            .field("created_at", FloatField::new().default_with(super::now))
    }
}

pub struct Comment;

impl Model for Comment {
    const NAME: &'static str = "Comment";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("comments")
            .field(
                "id",
                StringField::ddl("varchar(50)")
                    .primary_key()
                    .default_with(super::next_id),
            )
            .field("blog_id", StringField::ddl("varchar(50)"))
            .field("user_id", StringField::ddl("varchar(50)"))
            .field("user_name", StringField::ddl("varchar(50)"))
            .field("user_image", StringField::ddl("varchar(500)"))
            .field("content", TextField::new())
            .field("created_at", FloatField::new().default_with(super::now))
    }
}
