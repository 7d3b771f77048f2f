//! Parameterized query construction for the card and directory tables.

mod builder;
mod params;

pub use builder::{
    delete_kartu, insert_kartu, list_kartu, search_dosen, search_mahasiswa, update_kartu,
    QueryBuf, SEARCH_LIMIT,
};
pub use params::SqliteBindValue;
