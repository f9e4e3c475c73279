use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Request-level failure. Every variant renders as `{"message": ...}` with
/// the matching status; `Internal` keeps its source server-side only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(source) => {
                error!(error = %source, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        let v: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        v["message"].as_str().expect("message field").to_string()
    }

    #[tokio::test]
    async fn maps_variants_to_statuses() {
        let cases = [
            (
                ApiError::BadRequest("Not enough points".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Unauthorized("Invalid or expired token".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Forbidden("Access denied".into()),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::NotFound("Coupon not found".into()),
                StatusCode::NOT_FOUND,
            ),
        ];
        for (err, status) in cases {
            let res = err.into_response();
            assert_eq!(res.status(), status);
        }
    }

    #[tokio::test]
    async fn internal_hides_the_source() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused on 5432"));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let msg = body_message(res).await;
        assert_eq!(msg, "Server error");
    }

    #[tokio::test]
    async fn body_carries_the_message() {
        let res = ApiError::BadRequest("User already exists".into()).into_response();
        assert_eq!(body_message(res).await, "User already exists");
    }
}
