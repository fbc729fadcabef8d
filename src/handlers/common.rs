use crate::errors::{ApiError, ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::Validate;

/// Hard cap on page size for every list endpoint
pub const MAX_PAGE_LIMIT: u64 = 10_000;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Clamps a caller-supplied page size into [1, MAX_PAGE_LIMIT], falling back
/// to the endpoint's default. Defaults vary by entity (100-10000).
pub fn cap_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).clamp(1, MAX_PAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_limit_applies_default_and_bounds() {
        assert_eq!(cap_limit(None, 1000), 1000);
        assert_eq!(cap_limit(Some(50), 1000), 50);
        assert_eq!(cap_limit(Some(0), 1000), 1);
        assert_eq!(cap_limit(Some(999_999), 1000), MAX_PAGE_LIMIT);
    }
}
