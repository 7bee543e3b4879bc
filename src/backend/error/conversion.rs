/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly. Every error body has the same envelope:
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Validation failed",
 *   "errors": [{ "field": "email", "message": "email is required" }]
 * }
 * ```
 *
 * `errors` is present only for validation failures. Server errors are logged
 * here with full detail; the client only sees the generic message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::FieldError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let body = ErrorBody {
            success: false,
            message: self.message(),
            errors: self.field_errors().map(<[FieldError]>::to_vec),
        };

        (status, Json(body)).into_response()
    }
}
