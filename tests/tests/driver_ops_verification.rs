use pretty_assertions::assert_eq;
use rowmap::{
    driver::{Execute, Operation, Query},
    stmt::Value,
    Model,
};
use tests::{models, models::Item, setup};

#[tokio::test]
async fn finders_send_one_query_each() {
    let t = setup(models!(Item)).await;

    Item::find(3).exec(&t.db).await.unwrap();
    Item::find_all()
        .filter("name = ?", ["x"])
        .exec(&t.db)
        .await
        .unwrap();
    Item::find_number("count(id)").exec(&t.db).await.unwrap();

    let (op, response) = t.log.pop().unwrap();
    assert_eq!(
        op,
        Operation::Query(Query {
            sql: "select `id`, name, price, quantity, active from `Item` where `id`=?".into(),
            args: vec![Value::I64(3)],
            size: Some(1),
        })
    );
    assert!(response.unwrap().rows.is_values());

    let (op, _) = t.log.pop().unwrap();
    assert_eq!(
        op,
        Operation::Query(Query {
            sql: "select `id`, name, price, quantity, active from `Item` where name = ?".into(),
            args: vec![Value::from("x")],
            size: None,
        })
    );

    let (op, _) = t.log.pop().unwrap();
    assert_eq!(
        op,
        Operation::Query(Query {
            sql: "select count(id) _num_ from `Item`".into(),
            args: vec![],
            size: Some(1),
        })
    );

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn writes_bind_fields_then_key() {
    let t = setup(models!(Item)).await;

    let mut item = Item::record(&t.db)
        .unwrap()
        .with("id", 1)
        .unwrap()
        .with("name", "pen")
        .unwrap();
    item.save(&t.db).await.unwrap();

    item.set("qty", 4).unwrap();
    item.update(&t.db).await.unwrap();
    item.remove(&t.db).await.unwrap();

    let (op, response) = t.log.pop().unwrap();
    assert_eq!(
        op,
        Operation::Execute(Execute {
            sql: "insert into `Item` (name, price, quantity, active, `id`) values (?, ?, ?, ?, ?)"
                .into(),
            args: vec![
                Value::from("pen"),
                Value::F64(0.0),
                Value::I64(0),
                Value::Bool(false),
                Value::I64(1),
            ],
        })
    );
    assert_eq!(response.unwrap().rows.into_count().unwrap(), 1);

    let (op, _) = t.log.pop().unwrap();
    assert_eq!(
        op,
        Operation::Execute(Execute {
            sql: "update `Item` set name=?, price=?, quantity=?, active=? where `id`=?".into(),
            args: vec![
                Value::from("pen"),
                Value::F64(0.0),
                Value::I64(4),
                Value::Bool(false),
                Value::I64(1),
            ],
        })
    );

    let (op, _) = t.log.pop().unwrap();
    assert_eq!(
        op,
        Operation::Execute(Execute {
            sql: "delete from `Item` where `id`=?".into(),
            args: vec![Value::I64(1)],
        })
    );

    assert!(t.log.is_empty());
}
