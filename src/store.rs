//! Database file handling and schema bootstrap.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

/// Database file path from env `DATABASE_PATH`, default `./db/database.db`.
pub fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./db/database.db".into())
}

/// Open a pool on the given database file, creating the file (and its parent
/// directory) if missing. Call before serving; handlers share the pool.
pub async fn connect(path: &str) -> Result<SqlitePool, AppError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the three tables if absent. Foreign keys are intentionally not
/// declared: deployed databases carry none, and card writes must not fail
/// on dangling student/advisor references.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mahasiswa (
            nim   TEXT PRIMARY KEY,
            nama  TEXT NOT NULL,
            prodi TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dosen (
            id_dosen TEXT PRIMARY KEY,
            nama     TEXT NOT NULL,
            prodi    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kartu (
            id_kartu     INTEGER PRIMARY KEY AUTOINCREMENT,
            nim          TEXT NOT NULL,
            judul        TEXT NOT NULL,
            tanggal      TEXT NOT NULL,
            nomor_surat  TEXT NOT NULL,
            pembimbing_1 TEXT NOT NULL,
            pembimbing_2 TEXT NOT NULL,
            tipe         TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
