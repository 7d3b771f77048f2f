//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for cards and
//! directory (student/advisor) search.

use crate::model::{CardKind, KartuInput};
use crate::sql::params::SqliteBindValue;

/// Autocomplete queries never return more than this many rows.
pub const SEARCH_LIMIT: u32 = 20;

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqliteBindValue>,
}

impl QueryBuf {
    fn new(sql: impl Into<String>) -> Self {
        QueryBuf {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<SqliteBindValue>) {
        self.params.push(v.into());
    }
}

/// `%term%` for substring matching. The term is bound, never interpolated;
/// LIKE metacharacters inside it keep their wildcard meaning.
fn like_pattern(term: &str) -> String {
    format!("%{}%", term)
}

/// Students whose name, id, or program contains the term.
pub fn search_mahasiswa(term: &str) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "SELECT nama, nim, prodi FROM mahasiswa \
         WHERE nama LIKE ? OR nim LIKE ? OR prodi LIKE ? \
         LIMIT {}",
        SEARCH_LIMIT
    ));
    let pattern = like_pattern(term);
    q.push_param(pattern.clone());
    q.push_param(pattern.clone());
    q.push_param(pattern);
    q
}

/// Advisors whose name contains the term; a non-empty `prodi` narrows the
/// match to that program as well.
pub fn search_dosen(term: &str, prodi: &str) -> QueryBuf {
    if prodi.is_empty() {
        let mut q = QueryBuf::new(format!(
            "SELECT id_dosen, nama, prodi FROM dosen WHERE nama LIKE ? LIMIT {}",
            SEARCH_LIMIT
        ));
        q.push_param(like_pattern(term));
        q
    } else {
        let mut q = QueryBuf::new(format!(
            "SELECT id_dosen, nama, prodi FROM dosen \
             WHERE nama LIKE ? AND prodi LIKE ? \
             LIMIT {}",
            SEARCH_LIMIT
        ));
        q.push_param(like_pattern(term));
        q.push_param(like_pattern(prodi));
        q
    }
}

/// All cards of one category, joined with student and both advisors,
/// newest first.
pub fn list_kartu(kind: CardKind) -> QueryBuf {
    let mut q = QueryBuf::new(
        "SELECT \
            k.id_kartu, \
            k.nim, \
            m.prodi, \
            m.nama, \
            d1.nama AS p1, \
            d1.id_dosen AS p1_id, \
            d2.nama AS p2, \
            d2.id_dosen AS p2_id, \
            k.judul, \
            k.tanggal, \
            k.nomor_surat \
         FROM kartu k \
         JOIN mahasiswa m ON k.nim = m.nim \
         JOIN dosen d1 ON k.pembimbing_1 = d1.id_dosen \
         JOIN dosen d2 ON k.pembimbing_2 = d2.id_dosen \
         WHERE k.tipe = ? \
         ORDER BY k.id_kartu DESC",
    );
    q.push_param(kind.as_str());
    q
}

/// Insert a new card; `id_kartu` is auto-assigned by the store.
pub fn insert_kartu(kind: CardKind, input: &KartuInput) -> QueryBuf {
    let mut q = QueryBuf::new(
        "INSERT INTO kartu \
            (nim, judul, tanggal, nomor_surat, pembimbing_1, pembimbing_2, tipe) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    );
    q.push_param(input.nim.as_str());
    q.push_param(input.judul.as_str());
    q.push_param(input.tanggal.as_str());
    q.push_param(input.nomor_surat.as_str());
    q.push_param(input.p1.as_str());
    q.push_param(input.p2.as_str());
    q.push_param(kind.as_str());
    q
}

/// Update all writable fields of the card matching both id and category.
/// A category mismatch or unknown id matches zero rows.
pub fn update_kartu(kind: CardKind, id_kartu: i64, input: &KartuInput) -> QueryBuf {
    let mut q = QueryBuf::new(
        "UPDATE kartu \
         SET nim = ?, judul = ?, tanggal = ?, nomor_surat = ?, \
             pembimbing_1 = ?, pembimbing_2 = ? \
         WHERE id_kartu = ? AND tipe = ?",
    );
    q.push_param(input.nim.as_str());
    q.push_param(input.judul.as_str());
    q.push_param(input.tanggal.as_str());
    q.push_param(input.nomor_surat.as_str());
    q.push_param(input.p1.as_str());
    q.push_param(input.p2.as_str());
    q.push_param(id_kartu);
    q.push_param(kind.as_str());
    q
}

/// Delete by id, regardless of category.
pub fn delete_kartu(id_kartu: i64) -> QueryBuf {
    let mut q = QueryBuf::new("DELETE FROM kartu WHERE id_kartu = ?");
    q.push_param(id_kartu);
    q
}
