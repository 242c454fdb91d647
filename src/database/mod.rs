use crate::domain::{Cat, CatFields};
use async_trait::async_trait;

pub mod sqlite;

// only two things can go wrong talking to the store: getting a connection
// out of the pool, or running the statement on it
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DB connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub rows_affected: u64,
    pub last_insert_id: Option<i64>,
}

// shared between request handlers through AppState, so it must be Send + Sync.
// sqlx::Pool is thread safe
#[async_trait]
pub trait CatRepository: Send + Sync {
    async fn get_all_cats(&self) -> StoreResult<Vec<Cat>>;
    async fn get_cat_by_id(&self, id: &str) -> StoreResult<Option<Cat>>;

    // write operations
    async fn insert_cat(&self, fields: &CatFields) -> StoreResult<WriteOutcome>;
    async fn update_cat(&self, id: &str, fields: &CatFields) -> StoreResult<WriteOutcome>;
    async fn delete_cat(&self, id: &str) -> StoreResult<WriteOutcome>;
}
