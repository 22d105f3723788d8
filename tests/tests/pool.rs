use rowmap::{Config, Db, Model};
use tests::{config, models, models::Item, setup, setup_with, TestDriver};

#[tokio::test]
async fn opens_min_size_connections() {
    let driver = TestDriver::new();
    let t = setup_with(
        models!(Item),
        config().min_size(3).max_size(5),
        driver.clone(),
    )
    .await;

    assert_eq!(driver.connections_opened(), 3);
    assert_eq!(t.db.status().max_size, 5);

    // Later work reuses the warm connections
    Item::find_all().exec(&t.db).await.unwrap();
    assert_eq!(driver.connections_opened(), 3);
}

#[tokio::test]
async fn max_size_is_capped_by_the_driver() {
    let t = setup_with(
        models!(Item),
        config().max_size(10),
        TestDriver::new().max_connections(2),
    )
    .await;

    assert_eq!(t.db.status().max_size, 2);
}

#[tokio::test]
async fn closed_pool() {
    let t = setup(models!(Item)).await;
    let other = t.db.clone();

    assert!(!t.db.is_closed());
    t.db.close();
    assert!(other.is_closed());

    let err = Item::find(1).exec(&other).await.unwrap_err();
    assert!(err.is_pool_not_initialized());

    let mut item = Item::record(&t.db).unwrap().with("id", 1).unwrap();
    let err = item.save(&t.db).await.unwrap_err();
    assert!(err.is_pool_not_initialized());

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let err = Db::builder()
        .build(Config::new(), TestDriver::new())
        .await
        .unwrap_err();
    assert!(err.is_invalid_config());

    let err = Db::builder()
        .build(config().max_size(1).min_size(2), TestDriver::new())
        .await
        .unwrap_err();
    assert!(err.is_invalid_config());
}
