//! Route handlers: card CRUD and autocomplete search.

pub mod kartu;
pub mod search;
