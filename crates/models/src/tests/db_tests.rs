use crate::db::{connect, connect_with_config, test_connection, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

use super::skip_db_tests;

#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    if skip_db_tests() {
        println!("Skipping database tests");
        return Ok(());
    }

    let start = Instant::now();
    let db = connect().await?;
    let connection_time = start.elapsed();

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    assert!(connection_time < Duration::from_secs(5), "Connection took too long: {:?}", connection_time);
    Ok(())
}

#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: crate::db::DATABASE_URL.clone(),
        max_connections: 3,
        min_connections: 1,
        connect_timeout_secs: 10,
        ..Default::default()
    };
    let db = connect_with_config(&config).await?;
    test_connection(&db).await?;
    Ok(())
}
