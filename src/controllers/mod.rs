pub mod health;
pub mod roast;
pub mod token_exchange;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, reporting malformed input as a validation error.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}
