use crate::database::{CatRepository, StoreError, StoreResult, WriteOutcome};
use crate::domain::{Cat, CatFields};
use crate::features::cats::model::DbCat;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Pool, Sqlite};

const CAT_COLUMNS: &str = "id, name, tag, description, image";

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    // the connection goes back to the pool when the guard drops
    async fn connection(&self) -> StoreResult<PoolConnection<Sqlite>> {
        self.pool.acquire().await.map_err(StoreError::Connection)
    }
}

#[async_trait]
impl CatRepository for SqliteRepository {
    async fn get_all_cats(&self) -> StoreResult<Vec<Cat>> {
        let mut conn = self.connection().await?;

        let query = format!("SELECT {CAT_COLUMNS} FROM cats ORDER BY id");
        let db_cats = sqlx::query_as::<_, DbCat>(&query)
            .fetch_all(&mut *conn)
            .await
            .map_err(StoreError::Query)?;

        Ok(db_cats.into_iter().map(Cat::from).collect())
    }

    // ids arrive as raw path text. the INTEGER column affinity turns '5' into 5
    // before comparing, anything non-numeric simply matches no row
    async fn get_cat_by_id(&self, id: &str) -> StoreResult<Option<Cat>> {
        let mut conn = self.connection().await?;

        let query = format!("SELECT {CAT_COLUMNS} FROM cats WHERE id = ?");
        let db_cat = sqlx::query_as::<_, DbCat>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(StoreError::Query)?;

        if let Some(cat) = &db_cat {
            tracing::debug!(%cat, "Fetched cat");
        }

        Ok(db_cat.map(Cat::from))
    }

    async fn insert_cat(&self, fields: &CatFields) -> StoreResult<WriteOutcome> {
        let mut conn = self.connection().await?;

        let result = sqlx::query(
            "INSERT INTO cats (name, tag, description, image) VALUES (?, ?, ?, ?)",
        )
        .bind(fields.name.as_str())
        .bind(fields.tag.as_str())
        .bind(fields.description.as_str())
        .bind(fields.image.as_deref())
        .execute(&mut *conn)
        .await
        .map_err(StoreError::Query)?;

        Ok(WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: Some(result.last_insert_rowid()),
        })
    }

    async fn update_cat(&self, id: &str, fields: &CatFields) -> StoreResult<WriteOutcome> {
        let mut conn = self.connection().await?;

        // every column is overwritten, absent image included
        let result = sqlx::query(
            "UPDATE cats SET name = ?, tag = ?, description = ?, image = ? WHERE id = ?",
        )
        .bind(fields.name.as_str())
        .bind(fields.tag.as_str())
        .bind(fields.description.as_str())
        .bind(fields.image.as_deref())
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(StoreError::Query)?;

        Ok(WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: None,
        })
    }

    async fn delete_cat(&self, id: &str) -> StoreResult<WriteOutcome> {
        let mut conn = self.connection().await?;

        let result = sqlx::query("DELETE FROM cats WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StoreError::Query)?;

        Ok(WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: None,
        })
    }
}
