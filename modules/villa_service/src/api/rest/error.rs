//! Mapping of domain errors and request rejections to failure envelopes

use super::envelope::ErrorResponse;
use crate::contract::VillaError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;

/// Map domain errors to failure envelopes
pub fn map_domain_error(error: VillaError) -> ErrorResponse {
    match error {
        VillaError::Validation { errors } => ErrorResponse::failure(StatusCode::BAD_REQUEST, errors),

        VillaError::Duplicate { field, message } | VillaError::ForeignKey { field, message } => {
            ErrorResponse::failure(
                StatusCode::BAD_REQUEST,
                vec![format!("{}: {}", field, message)],
            )
        }

        VillaError::NotFound { resource, id } => ErrorResponse::failure(
            StatusCode::NOT_FOUND,
            vec![format!("{} with id '{}' was not found", resource, id)],
        ),

        VillaError::Persistence { message } => {
            tracing::error!("Request failed in persistence layer: {}", message);
            ErrorResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, vec![message])
        }
    }
}

/// Unparseable path segment (e.g. `/api/villas/abc`)
pub fn map_path_rejection(rejection: PathRejection) -> ErrorResponse {
    tracing::warn!("Rejected path: {}", rejection.body_text());
    ErrorResponse::failure(StatusCode::BAD_REQUEST, vec![rejection.body_text()])
}

/// Missing or malformed JSON body
pub fn map_json_rejection(rejection: JsonRejection) -> ErrorResponse {
    tracing::warn!("Rejected body: {}", rejection.body_text());
    ErrorResponse::failure(StatusCode::BAD_REQUEST, vec![rejection.body_text()])
}
