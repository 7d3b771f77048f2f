//! Server binary: env config, pool, schema bootstrap, router, serve.

use kartu_bimbingan::{api_routes, connect, database_path, ensure_schema, page_routes, AppState};
use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("kartu_bimbingan=info".parse()?),
        )
        .init();

    let db_path = database_path();
    let pool = connect(&db_path).await?;
    ensure_schema(&pool).await?;
    tracing::info!(path = %db_path, "database ready");

    let state = AppState { pool };
    let app = Router::new()
        .merge(page_routes())
        .merge(api_routes(state));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5678".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
