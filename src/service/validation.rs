//! Write-body validation. Required fields must be present and non-falsy
//! before any store interaction happens.

use crate::error::AppError;
use crate::model::KartuInput;
use serde_json::{Map, Value};

const REQUIRED_FIELDS: &[&str] = &["nim", "judul", "tanggal", "nomor_surat", "p1", "p2"];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body: all six writable fields present and non-falsy.
    pub fn card_input(body: &Map<String, Value>) -> Result<KartuInput, AppError> {
        Self::collect(body).ok_or_else(|| AppError::Validation("Missing required fields".into()))
    }

    /// Validate an update body: the six writable fields plus a card id.
    pub fn card_update(body: &Map<String, Value>) -> Result<(i64, KartuInput), AppError> {
        let missing = || AppError::Validation("Missing fields".into());
        let id = body
            .get("id_kartu")
            .and_then(card_id)
            .ok_or_else(missing)?;
        let input = Self::collect(body).ok_or_else(missing)?;
        Ok((id, input))
    }

    fn collect(body: &Map<String, Value>) -> Option<KartuInput> {
        let mut values = REQUIRED_FIELDS
            .iter()
            .map(|k| body.get(*k).and_then(field_text));
        Some(KartuInput {
            nim: values.next()??,
            judul: values.next()??,
            tanggal: values.next()??,
            nomor_surat: values.next()??,
            p1: values.next()??,
            p2: values.next()??,
        })
    }
}

/// Accept a non-empty string or a non-zero number; ids sometimes arrive as
/// JSON numbers from the forms. Everything falsy (absent, null, "", 0,
/// false) is rejected.
fn field_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Card id as i64, from a number or a numeric string. Zero is falsy and
/// rejected, matching the presence check on every other field.
fn card_id(v: &Value) -> Option<i64> {
    let id = match v {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    (id != 0).then_some(id)
}
