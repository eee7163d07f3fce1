//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers surface failures in the exact legacy envelopes clients depend
//! on: `{"Error": "..."}` for reference-data misses, `{"msg": "..."}` for
//! the favourites flow, and a bare 500 body for store failures.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } | Error::Missing { .. } => StatusCode::NOT_FOUND,
            Error::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::NotFound { message } => {
                HttpResponse::NotFound().json(json!({ "Error": message }))
            }
            Error::Missing { message } => HttpResponse::NotFound().json(json!({ "msg": message })),
            Error::Store { message } => {
                error!(error = %message, "store failure surfaced to client");
                HttpResponse::InternalServerError().body(message.clone())
            }
        }
    }
}
