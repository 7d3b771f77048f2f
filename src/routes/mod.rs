//! Explicit routing tables, built once at startup.

mod api;
mod pages;

pub use api::api_routes;
pub use pages::page_routes;
