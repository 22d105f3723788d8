use pretty_assertions::assert_eq;
use rowmap::{driver::Transaction, stmt::Value, Db, Model};
use tests::{config, models, models::Item, setup, setup_with, TestDriver};

fn insert_args(id: i64) -> Vec<Value> {
    vec![
        "item".into(),
        1.5.into(),
        2.into(),
        true.into(),
        id.into(),
    ]
}

fn insert_sql(db: &Db) -> String {
    db.model("Item").unwrap().templates.insert.clone()
}

#[tokio::test]
async fn explicit_transaction_commits() {
    let t = setup(models!(Item)).await;
    let sql = insert_sql(&t.db);

    let count = t.db.execute(&sql, insert_args(1), false).await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        t.log.statements(),
        ["START TRANSACTION", sql.as_str(), "COMMIT"]
    );
    assert_eq!(t.driver.rows("Item").len(), 1);
}

#[tokio::test]
async fn failed_statement_rolls_back_once() {
    let t = setup(models!(Item)).await;
    let sql = insert_sql(&t.db);

    t.driver.fail_on("insert into");

    let err = t.db.execute(&sql, insert_args(1), false).await.unwrap_err();

    assert!(err.is_query_execution());
    assert!(err.cause().is_some_and(|cause| cause.is_driver()));
    assert_eq!(
        err.root().to_string(),
        "injected failure (matched `insert into`)"
    );

    assert_eq!(
        t.log.statements(),
        ["START TRANSACTION", sql.as_str(), "ROLLBACK"]
    );
    assert_eq!(t.log.count_transaction(Transaction::Rollback), 1);
    assert_eq!(t.log.count_transaction(Transaction::Commit), 0);
    assert!(t.driver.rows("Item").is_empty());
}

#[tokio::test]
async fn autocommit_failure_sends_no_rollback() {
    let t = setup(models!(Item)).await;
    let sql = insert_sql(&t.db);

    t.driver.fail_on("insert into");

    let err = t.db.execute(&sql, insert_args(1), true).await.unwrap_err();

    assert!(err.is_query_execution());
    assert_eq!(t.log.statements(), [sql]);
    assert!(!t.log.any(|op| op.is_transaction()));
}

#[tokio::test]
async fn failed_rollback_keeps_original_error() {
    let t = setup(models!(Item)).await;
    let sql = insert_sql(&t.db);

    t.driver.fail_on("insert into");
    t.driver.fail_on("ROLLBACK");

    let err = t.db.execute(&sql, insert_args(1), false).await.unwrap_err();

    assert!(err.is_query_execution());
    assert_eq!(
        err.root().to_string(),
        "injected failure (matched `insert into`)"
    );
    assert_eq!(t.log.count_transaction(Transaction::Rollback), 1);
}

#[tokio::test]
async fn failed_rollback_discards_the_connection() {
    let driver = TestDriver::new();
    let t = setup_with(models!(Item), config().min_size(1).max_size(1), driver.clone()).await;
    let sql = insert_sql(&t.db);
    assert_eq!(driver.connections_opened(), 1);

    driver.fail_on("insert into");
    driver.fail_on("ROLLBACK");
    t.db.execute(&sql, insert_args(1), false).await.unwrap_err();

    // The session may still be inside the transaction, so it is not reused
    assert_eq!(t.db.status().size, 0);

    driver.clear_failures();
    let count = t.db.execute(&sql, insert_args(1), true).await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(driver.connections_opened(), 2);
    assert_eq!(driver.rows("Item").len(), 1);
}

#[tokio::test]
async fn failed_start_runs_nothing() {
    let t = setup(models!(Item)).await;
    let sql = insert_sql(&t.db);

    t.driver.fail_on("START TRANSACTION");

    let err = t.db.execute(&sql, insert_args(1), false).await.unwrap_err();

    assert!(err.is_query_execution());
    assert_eq!(t.log.statements(), ["START TRANSACTION"]);
    assert!(!t.log.has_execute());
}

#[tokio::test]
async fn session_without_autocommit_commits_every_write() {
    let t = setup_with(
        models!(Item),
        config().autocommit(false),
        TestDriver::new().autocommit(false),
    )
    .await;

    let mut item = Item::record(&t.db).unwrap().with("id", 1).unwrap();
    item.save(&t.db).await.unwrap();

    let sql = insert_sql(&t.db);
    assert_eq!(t.log.statements(), [sql.as_str(), "COMMIT"]);
    assert_eq!(t.driver.rows("Item").len(), 1);
}

#[tokio::test]
async fn failed_commit_rolls_back() {
    let t = setup_with(
        models!(Item),
        config().autocommit(false),
        TestDriver::new().autocommit(false),
    )
    .await;

    t.driver.fail_on("COMMIT");

    let mut item = Item::record(&t.db).unwrap().with("id", 1).unwrap();
    let err = item.save(&t.db).await.unwrap_err();

    assert!(err.is_query_execution());
    assert_eq!(
        err.root().to_string(),
        "injected failure (matched `COMMIT`)"
    );

    let sql = insert_sql(&t.db);
    assert_eq!(t.log.statements(), [sql.as_str(), "COMMIT", "ROLLBACK"]);
    assert!(t.driver.rows("Item").is_empty());
}
