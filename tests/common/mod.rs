use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use kartu_bimbingan::{api_routes, ensure_schema, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied. One connection only:
/// every `:memory:` connection is its own database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    ensure_schema(&pool).await.expect("apply schema");
    pool
}

/// Students and advisors the card tests join against.
pub async fn seed_directory(pool: &SqlitePool) {
    for (nim, nama, prodi) in [
        ("123", "Budi Santoso", "Informatika"),
        ("1811500001", "Siti Aminah", "Sistem Informasi"),
    ] {
        sqlx::query("INSERT INTO mahasiswa (nim, nama, prodi) VALUES (?, ?, ?)")
            .bind(nim)
            .bind(nama)
            .bind(prodi)
            .execute(pool)
            .await
            .expect("seed mahasiswa");
    }
    for (id, nama, prodi) in [
        ("D1", "Dr. Sri Rahayu", "Informatika"),
        ("D2", "Dr. Andi Wijaya", "Sistem Informasi"),
        ("D3", "Dr. Sri Mulyani", "Sistem Informasi"),
    ] {
        sqlx::query("INSERT INTO dosen (id_dosen, nama, prodi) VALUES (?, ?, ?)")
            .bind(id)
            .bind(nama)
            .bind(prodi)
            .execute(pool)
            .await
            .expect("seed dosen");
    }
}

pub fn app(pool: SqlitePool) -> Router {
    api_routes(AppState { pool })
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.expect("infallible");
    let status = res.status();
    let bytes = res.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, req).await
}
