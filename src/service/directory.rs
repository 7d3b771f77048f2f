//! Student and advisor autocomplete lookups.

use crate::error::AppError;
use crate::model::{DosenHit, MahasiswaHit};
use crate::sql;
use sqlx::SqlitePool;

pub struct DirectoryService;

impl DirectoryService {
    /// Students whose name, nim, or program contains the term.
    /// The minimum-length guard lives in the handler; this always queries.
    pub async fn search_mahasiswa(
        pool: &SqlitePool,
        term: &str,
    ) -> Result<Vec<MahasiswaHit>, AppError> {
        let q = sql::search_mahasiswa(term);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, MahasiswaHit>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    /// Advisors whose name contains the term, optionally narrowed by program.
    pub async fn search_dosen(
        pool: &SqlitePool,
        term: &str,
        prodi: &str,
    ) -> Result<Vec<DosenHit>, AppError> {
        let q = sql::search_dosen(term, prodi);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, DosenHit>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }
}
