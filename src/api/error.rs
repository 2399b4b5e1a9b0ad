//! Mapping of proxy failures to JSON error responses.

use crate::utils::error::ProxyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body shape shared by every error response: `{error, details}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    /// Wrap a failed operation. `summary` names what the caller asked for.
    ///
    /// Upstream rejections answer 500 unless `propagate_upstream_status` is set,
    /// in which case a 4xx/5xx status from Loyverse is passed through.
    pub fn from_proxy(summary: &str, err: ProxyError, propagate_upstream_status: bool) -> Self {
        tracing::error!("{}: {}", summary, err);

        let status = if matches!(err, ProxyError::InvalidEndpoint { .. }) {
            StatusCode::BAD_REQUEST
        } else {
            err.upstream_status()
                .filter(|_| propagate_upstream_status)
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        };

        Self {
            status,
            body: ErrorBody {
                error: summary.to_string(),
                details: Some(err.to_string()),
            },
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                error: "Not found".to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status: u16) -> ProxyError {
        ProxyError::Upstream {
            status,
            body: "rejected".to_string(),
        }
    }

    #[test]
    fn test_upstream_error_collapses_to_500_by_default() {
        let err = ApiError::from_proxy(
            "Failed to fetch items from Loyverse API",
            upstream(404),
            false,
        );

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error, "Failed to fetch items from Loyverse API");
        assert_eq!(
            err.body.details.as_deref(),
            Some("Loyverse API error: 404 - rejected")
        );
    }

    #[test]
    fn test_upstream_status_is_propagated_when_enabled() {
        let err = ApiError::from_proxy("summary", upstream(429), true);
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);

        let err = ApiError::from_proxy("summary", upstream(302), true);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_non_upstream_errors_stay_500_when_propagating() {
        let err = ApiError::from_proxy(
            "summary",
            ProxyError::ProcessingError {
                message: "no items array".to_string(),
            },
            true,
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body.details.as_deref(),
            Some("Data processing error: no items array")
        );
    }

    #[test]
    fn test_invalid_endpoint_is_bad_request() {
        let err = ApiError::from_proxy(
            "summary",
            ProxyError::InvalidEndpoint {
                endpoint: "..".to_string(),
            },
            false,
        );
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_body_has_no_details() {
        let err = ApiError::not_found();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            serde_json::json!({"error": "Not found"})
        );
    }
}
