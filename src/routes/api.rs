//! JSON API routes. Paths (including trailing slashes) match the deployed
//! frontend, so they are spelled out rather than pattern-matched by category.

use crate::handlers::{kartu, search};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    let status = if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_ok() {
        "ok"
    } else {
        "degraded"
    };
    Json(HealthBody { status })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/get/kartu-putih/", get(kartu::list_putih))
        .route("/api/get/kartu-kuning/", get(kartu::list_kuning))
        .route("/api/get/mahasiswa", get(search::mahasiswa))
        .route("/api/get/dosen", get(search::dosen))
        .route("/api/post/kartu-putih", post(kartu::create_putih))
        .route("/api/post/kartu-kuning", post(kartu::create_kuning))
        .route("/api/update/kartu-putih", post(kartu::update_putih))
        .route("/api/update/kartu-kuning", post(kartu::update_kuning))
        .route("/api/delete/kartu-putih/:id", delete(kartu::delete_putih))
        .route("/api/delete/kartu-kuning/:id", delete(kartu::delete_kuning))
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(state)
}
