//! Kartu Bimbingan: guidance-card record manager (JSON API over SQLite).

pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{CardKind, DosenHit, KartuInput, KartuRow, MahasiswaHit};
pub use response::success;
pub use routes::{api_routes, page_routes};
pub use service::{DirectoryService, KartuService, RequestValidator};
pub use state::AppState;
pub use store::{connect, database_path, ensure_schema};
