//! API error type shared by handlers and services.
//!
//! Every fallible operation funnels into `ApiError` so handlers can use `?`
//! and the wire shape stays a single `{"error": "..."}` object.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// Input failed a validation rule. The message is already user-facing Turkish.
  #[error("{0}")]
  Validation(String),

  /// Entity lookup failed. Holds the entity label, e.g. "Kelime".
  #[error("{0} bulunamadı")]
  NotFound(&'static str),

  /// Caller is not an admin.
  #[error("Bu işlem için yönetici yetkisi gerekiyor")]
  Forbidden,

  /// Write conflicts with current state (duplicate signup, double approval).
  #[error("{0}")]
  Conflict(String),

  /// Not enough data to perform the operation (e.g. quiz needs 4 words).
  #[error("{0}")]
  InsufficientData(String),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Forbidden => StatusCode::FORBIDDEN,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::InsufficientData(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_codes_match_variants() {
    assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::NotFound("Kelime").status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
    assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
    assert_eq!(ApiError::InsufficientData("x".into()).status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[test]
  fn not_found_appends_turkish_suffix() {
    assert_eq!(ApiError::NotFound("Kelime").to_string(), "Kelime bulunamadı");
    assert_eq!(ApiError::NotFound("Kullanıcı").to_string(), "Kullanıcı bulunamadı");
  }

  #[test]
  fn forbidden_message_is_fixed() {
    assert_eq!(
      ApiError::Forbidden.to_string(),
      "Bu işlem için yönetici yetkisi gerekiyor"
    );
  }
}
