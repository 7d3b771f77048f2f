//! Server-rendered pages are static files; rendering logic lives in the
//! frontend assets under `static/`.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

pub fn page_routes() -> Router {
    Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route_service("/dashboard/", ServeFile::new("static/dashboard.html"))
        .route_service(
            "/kartu-bimbingan/kartu-putih/",
            ServeFile::new("static/kartu-putih.html"),
        )
        .route_service(
            "/kartu-bimbingan/kartu-kuning/",
            ServeFile::new("static/kartu-kuning.html"),
        )
        .nest_service("/static", ServeDir::new("static"))
}
