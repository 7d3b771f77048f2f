//! Autocomplete endpoints for the card forms. Terms under three characters
//! short-circuit to an empty array without touching the store.

use crate::error::AppError;
use crate::model::{DosenHit, MahasiswaHit};
use crate::service::DirectoryService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

const MIN_TERM_CHARS: usize = 3;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub prodi: String,
}

pub async fn mahasiswa(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MahasiswaHit>>, AppError> {
    let term = params.q.trim();
    if term.chars().count() < MIN_TERM_CHARS {
        return Ok(Json(Vec::new()));
    }
    let hits = DirectoryService::search_mahasiswa(&state.pool, term).await?;
    Ok(Json(hits))
}

pub async fn dosen(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<DosenHit>>, AppError> {
    let term = params.q.trim();
    if term.chars().count() < MIN_TERM_CHARS {
        return Ok(Json(Vec::new()));
    }
    let hits = DirectoryService::search_dosen(&state.pool, term, params.prodi.trim()).await?;
    Ok(Json(hits))
}
