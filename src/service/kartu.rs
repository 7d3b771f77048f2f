//! Card CRUD execution against SQLite.

use crate::error::AppError;
use crate::model::{CardKind, KartuInput, KartuRow};
use crate::sql::{self, QueryBuf};
use sqlx::SqlitePool;

pub struct KartuService;

impl KartuService {
    /// All cards of one category, joined with student and advisors,
    /// newest first.
    pub async fn list(pool: &SqlitePool, kind: CardKind) -> Result<Vec<KartuRow>, AppError> {
        let q = sql::list_kartu(kind);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, KartuRow>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    /// Insert a new card; the store assigns its id.
    pub async fn create(
        pool: &SqlitePool,
        kind: CardKind,
        input: &KartuInput,
    ) -> Result<(), AppError> {
        let q = sql::insert_kartu(kind, input);
        Self::execute(pool, &q).await?;
        Ok(())
    }

    /// Update the card matching both id and category. Zero matched rows is
    /// not an error: a mismatched category or unknown id reports success
    /// like the zero-row UPDATE it is.
    pub async fn update(
        pool: &SqlitePool,
        kind: CardKind,
        id_kartu: i64,
        input: &KartuInput,
    ) -> Result<u64, AppError> {
        let q = sql::update_kartu(kind, id_kartu, input);
        Self::execute(pool, &q).await
    }

    /// Delete by id. Idempotent: deleting an absent id affects zero rows.
    pub async fn delete(pool: &SqlitePool, id_kartu: i64) -> Result<u64, AppError> {
        let q = sql::delete_kartu(id_kartu);
        Self::execute(pool, &q).await
    }

    async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}
