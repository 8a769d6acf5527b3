//! Uniform response envelope returned by every endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Status, success flag, error list and payload of one response
///
/// Built fresh inside each handler invocation and never shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code mirrored in the body
    pub status_code: u16,

    /// `false` whenever the request failed
    pub is_success: bool,

    /// Ordered error messages; empty on success
    #[serde(default)]
    pub error_messages: Vec<String>,

    /// Payload: a DTO, a list of DTOs, or nothing
    pub result: Option<T>,
}

/// Envelope of a failed request
pub type ErrorResponse = ApiResponse<()>;

impl<T> ApiResponse<T> {
    fn success(status: StatusCode, result: Option<T>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: true,
            error_messages: Vec::new(),
            result,
        }
    }

    /// 200 with a payload
    pub fn ok(result: T) -> Self {
        Self::success(StatusCode::OK, Some(result))
    }

    /// 201 with the created resource
    pub fn created(result: T) -> Self {
        Self::success(StatusCode::CREATED, Some(result))
    }

    /// 204, no payload
    pub fn no_content() -> Self {
        Self::success(StatusCode::NO_CONTENT, None)
    }

    /// Unsuccessful response carrying every error message
    pub fn failure(status: StatusCode, error_messages: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: false,
            error_messages,
            result: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        // 204 must not carry a body
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelopes_have_no_errors() {
        let env = ApiResponse::ok(vec![1, 2]);
        assert_eq!(env.status_code, 200);
        assert!(env.is_success);
        assert!(env.error_messages.is_empty());
        assert_eq!(env.result, Some(vec![1, 2]));

        let env = ApiResponse::created("x");
        assert_eq!(env.status(), StatusCode::CREATED);
    }

    #[test]
    fn failure_keeps_error_order() {
        let env = ErrorResponse::failure(
            StatusCode::BAD_REQUEST,
            vec!["first".into(), "second".into()],
        );
        assert!(!env.is_success);
        assert_eq!(env.error_messages, vec!["first", "second"]);
        assert_eq!(env.result, None);
    }

    #[test]
    fn no_content_has_empty_body() {
        let response = ErrorResponse::no_content().into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(ApiResponse::ok("v")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status_code": 200,
                "is_success": true,
                "error_messages": [],
                "result": "v"
            })
        );
    }
}
