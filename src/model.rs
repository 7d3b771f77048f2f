//! Domain types: card categories, row shapes, validated write input.

use serde::Serialize;
use sqlx::FromRow;

/// The two guidance-card categories. Routes fix the category, so it is a
/// closed enum rather than a free string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Putih,
    Kuning,
}

impl CardKind {
    /// The literal stored in `kartu.tipe`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Putih => "Putih",
            CardKind::Kuning => "Kuning",
        }
    }
}

/// A card joined with its student and both advisors, as served by the list
/// endpoints. Field names match the wire format exactly.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct KartuRow {
    pub id_kartu: i64,
    pub nim: String,
    pub prodi: String,
    pub nama: String,
    pub p1: String,
    pub p1_id: String,
    pub p2: String,
    pub p2_id: String,
    pub judul: String,
    pub tanggal: String,
    pub nomor_surat: String,
}

/// One student autocomplete match.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MahasiswaHit {
    pub nama: String,
    pub nim: String,
    pub prodi: String,
}

/// One advisor autocomplete match.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DosenHit {
    pub id_dosen: String,
    pub nama: String,
    pub prodi: String,
}

/// Validated writable fields of a card. Produced by `RequestValidator` from
/// a JSON body; every field is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KartuInput {
    pub nim: String,
    pub judul: String,
    pub tanggal: String,
    pub nomor_surat: String,
    pub p1: String,
    pub p2: String,
}
