use crate::AppState;
use crate::config::CatsConfig;
use crate::database::sqlite::SqliteRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::PathBuf;
use std::sync::Arc;

mod unit_sqlite_cats_database;

// a single connection keeps the in-memory database alive for the whole test
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_config(frontend_path: PathBuf) -> CatsConfig {
    CatsConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        frontend_path,
        host: [127, 0, 0, 1].into(),
        port: 0,
    }
}

pub fn test_state(pool: Pool<Sqlite>) -> AppState {
    AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
        config: Arc::new(test_config(PathBuf::from("./public"))),
    }
}
