use pretty_assertions::assert_eq;
use rowmap::{
    schema::{IntegerField, ModelDef, StringField},
    stmt::Value,
    Model,
};
use tests::{models, setup};

struct Post;

impl Model for Post {
    const NAME: &'static str = "Post";

    fn schema() -> ModelDef {
        ModelDef::new(Self::NAME)
            .table("posts")
            .field("id", IntegerField::new().primary_key().name("post_id"))
            .field("title", StringField::new().name("headline"))
            .field("views", IntegerField::new())
    }
}

#[tokio::test]
async fn fields_map_to_renamed_columns() {
    let t = setup(models!(Post)).await;

    let model = t.db.model("Post").unwrap();
    assert_eq!(model.templates.select, "select `post_id`, headline, views from `posts`");
    assert_eq!(
        model.templates.update,
        "update `posts` set headline=?, views=? where `post_id`=?"
    );

    let mut post = Post::record(&t.db)
        .unwrap()
        .with("id", 7)
        .unwrap()
        .with("title", "Hello")
        .unwrap();
    post.save(&t.db).await.unwrap();

    let rows = t.driver.rows("posts");
    assert_eq!(
        rows[0].columns().collect::<Vec<_>>(),
        ["post_id", "headline", "views"]
    );
    assert_eq!(rows[0].get("headline"), Some(&Value::from("Hello")));
    assert_eq!(rows[0].get("views"), Some(&Value::I64(0)));

    let found = Post::find_all()
        .filter("headline = ?", ["Hello"])
        .exec(&t.db)
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get_as::<String>("title").unwrap(), "Hello");
    assert_eq!(found[0].primary_key(), Some(&Value::I64(7)));
    assert!(found[0].get("headline").is_none());
}
