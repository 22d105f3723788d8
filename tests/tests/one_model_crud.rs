use pretty_assertions::assert_eq;
use rowmap::{stmt::Value, Model};
use tests::{models, models::User, setup};

#[tokio::test]
async fn save_find_update_remove() {
    let t = setup(models!(User)).await;
    let db = &t.db;

    let mut user = User::record(db)
        .unwrap()
        .with("name", "Test10")
        .unwrap()
        .with("email", "test10@example.com")
        .unwrap()
        .with("passwd", "123456")
        .unwrap()
        .with("image", "about:blank")
        .unwrap();

    user.save(db).await.unwrap();

    // Defaults are written back to the record
    let id = user.get_as::<String>("id").unwrap();
    assert_eq!(id.len(), 50);
    assert_eq!(user.get("admin"), Some(&Value::Bool(false)));
    assert!(user.get_as::<f64>("created_at").unwrap() > 0.0);

    let model = db.model("User").unwrap();
    assert_eq!(t.log.statements(), [model.templates.insert.clone()]);

    let mut found = User::find(id.as_str())
        .exec(db)
        .await
        .unwrap()
        .expect("user was saved");
    assert_eq!(found, user);
    assert_eq!(found.get_as::<bool>("admin").unwrap(), false);

    found.set("name", "Test11").unwrap();
    found.update(db).await.unwrap();

    let found = User::find(id.as_str()).exec(db).await.unwrap().unwrap();
    assert_eq!(found.get_as::<String>("name").unwrap(), "Test11");
    assert_eq!(found.get_as::<String>("email").unwrap(), "test10@example.com");

    found.remove(db).await.unwrap();

    assert!(User::find(id.as_str()).exec(db).await.unwrap().is_none());
    assert!(t.driver.rows("users").is_empty());
}

#[tokio::test]
async fn explicit_values_win_over_defaults() {
    let t = setup(models!(User)).await;

    let mut user = User::record(&t.db)
        .unwrap()
        .with("id", "0001")
        .unwrap()
        .with("admin", true)
        .unwrap()
        .with("created_at", 1.5)
        .unwrap();
    user.save(&t.db).await.unwrap();

    let rows = t.driver.rows("users");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id"), Some(&Value::from("0001")));
    assert_eq!(rows[0].get("admin"), Some(&Value::I64(1)));
    assert_eq!(rows[0].get("created_at"), Some(&Value::F64(1.5)));

    // Fields without a default are inserted as NULL and left unset
    assert_eq!(rows[0].get("name"), Some(&Value::Null));
    assert_eq!(user.get("name"), None);
}

#[tokio::test]
async fn update_and_remove_missing_row() {
    let t = setup(models!(User)).await;

    let user = User::record(&t.db)
        .unwrap()
        .with("id", "missing")
        .unwrap()
        .with("name", "Ghost")
        .unwrap();

    let err = user.update(&t.db).await.unwrap_err();
    assert!(err.is_persistence());
    assert_eq!(
        err.to_string(),
        "failed to update by primary key: affected rows: 0 (expected 1)"
    );

    let err = user.remove(&t.db).await.unwrap_err();
    assert!(err.is_persistence());
    assert_eq!(
        err.to_string(),
        "failed to remove by primary key: affected rows: 0 (expected 1)"
    );
}

#[tokio::test]
async fn duplicate_primary_key() {
    let t = setup(models!(User)).await;

    let mut first = User::record(&t.db).unwrap().with("id", "u1").unwrap();
    first.save(&t.db).await.unwrap();

    let mut second = User::record(&t.db).unwrap().with("id", "u1").unwrap();
    let err = second.save(&t.db).await.unwrap_err();

    assert!(err.is_query_execution());
    assert!(err.cause().is_some_and(|cause| cause.is_driver()));
    assert!(err.root().is_driver());
    assert!(err
        .root()
        .to_string()
        .contains("UNIQUE constraint failed: users.id"));
    assert_eq!(t.driver.rows("users").len(), 1);
}

#[tokio::test]
async fn unknown_field() {
    let t = setup(models!(User)).await;

    let mut user = User::record(&t.db).unwrap();
    let err = user.set("password", "123456").unwrap_err();

    assert!(err.is_unknown_field());
    assert_eq!(err.to_string(), "unknown field `password` on model `User`");
    assert!(t.log.is_empty());
}

#[tokio::test]
async fn serialize_record() {
    let t = setup(models!(User)).await;

    let mut user = User::record(&t.db)
        .unwrap()
        .with("name", "Test10")
        .unwrap()
        .with("id", "u1")
        .unwrap()
        .with("created_at", 2.5)
        .unwrap();
    user.save(&t.db).await.unwrap();

    let found = User::find("u1").exec(&t.db).await.unwrap().unwrap();

    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        serde_json::json!({
            "id": "u1",
            "email": null,
            "passwd": null,
            "admin": false,
            "name": "Test10",
            "image": null,
            "created_at": 2.5,
        })
    );
}
