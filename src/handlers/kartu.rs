//! Card endpoints. Each wire route fixes its category; the thin per-category
//! wrappers keep the routing table explicit and the logic in one place.

use crate::error::AppError;
use crate::model::{CardKind, KartuRow};
use crate::response::{self, SuccessBody};
use crate::service::{KartuService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

async fn list(state: &AppState, kind: CardKind) -> Result<Json<Vec<KartuRow>>, AppError> {
    let rows = KartuService::list(&state.pool, kind).await?;
    Ok(Json(rows))
}

async fn create(
    state: &AppState,
    kind: CardKind,
    body: Value,
) -> Result<Json<SuccessBody>, AppError> {
    let body = body_to_map(body)?;
    let input = RequestValidator::card_input(&body)?;
    KartuService::create(&state.pool, kind, &input).await?;
    Ok(response::success())
}

async fn update(
    state: &AppState,
    kind: CardKind,
    body: Value,
) -> Result<Json<SuccessBody>, AppError> {
    let body = body_to_map(body)?;
    let (id_kartu, input) = RequestValidator::card_update(&body)?;
    let affected = KartuService::update(&state.pool, kind, id_kartu, &input).await?;
    if affected == 0 {
        // Mismatched category or unknown id. Reported as success, matching
        // the existing clients' expectations.
        tracing::debug!(id_kartu, kind = kind.as_str(), "update matched no rows");
    }
    Ok(response::success())
}

async fn delete(state: &AppState, id_kartu: i64) -> Result<Json<SuccessBody>, AppError> {
    KartuService::delete(&state.pool, id_kartu).await?;
    Ok(response::success())
}

pub async fn list_putih(State(state): State<AppState>) -> Result<Json<Vec<KartuRow>>, AppError> {
    list(&state, CardKind::Putih).await
}

pub async fn list_kuning(State(state): State<AppState>) -> Result<Json<Vec<KartuRow>>, AppError> {
    list(&state, CardKind::Kuning).await
}

pub async fn create_putih(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SuccessBody>, AppError> {
    create(&state, CardKind::Putih, body).await
}

pub async fn create_kuning(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SuccessBody>, AppError> {
    create(&state, CardKind::Kuning, body).await
}

pub async fn update_putih(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SuccessBody>, AppError> {
    update(&state, CardKind::Putih, body).await
}

pub async fn update_kuning(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SuccessBody>, AppError> {
    update(&state, CardKind::Kuning, body).await
}

pub async fn delete_putih(
    State(state): State<AppState>,
    Path(id_kartu): Path<i64>,
) -> Result<Json<SuccessBody>, AppError> {
    delete(&state, id_kartu).await
}

pub async fn delete_kuning(
    State(state): State<AppState>,
    Path(id_kartu): Path<i64>,
) -> Result<Json<SuccessBody>, AppError> {
    delete(&state, id_kartu).await
}
