//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON, missing fields, non-integer query or
//! path values) surface as `validation_failed` errors with a 422 status,
//! before any storage access happens.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidBody,
    InvalidQuery,
    InvalidPath,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidBody => "invalid_body",
            Self::InvalidQuery => "invalid_query",
            Self::InvalidPath => "invalid_path",
        }
    }
}

fn rejection(message: &str, code: ValidationCode, reason: impl ToString) -> Error {
    Error::validation_failed(message).with_details(json!({
        "code": code.as_str(),
        "reason": reason.to_string(),
    }))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection("Request body is invalid", ValidationCode::InvalidBody, err).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection("Query parameters are invalid", ValidationCode::InvalidQuery, err).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejection("Path parameters are invalid", ValidationCode::InvalidPath, err).into()
}

/// JSON body extractor configuration reporting failures as 422.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Query-string extractor configuration reporting failures as 422.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

/// Path extractor configuration reporting failures as 422.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}
