/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / `{ "message": ... }` body)
 * - gate が short-circuit する時もこの body をそのまま書く
 */
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("access token has expired.")]
    AccessTokenExpired,

    #[error("authentication failed.")]
    AuthenticationFailed,

    #[error("refresh token is invalid.")]
    InvalidRefreshToken,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("request body is too large.")]
    PayloadTooLarge,

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AccessTokenExpired
            | AppError::AuthenticationFailed
            | AppError::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(_: ConfigError) -> Self {
        AppError::Internal
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // body limit hit while buffering (no Content-Length up front)
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::InvalidRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, MessageResponse) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn auth_errors_are_unauthorized_with_message_body() {
        for (err, message) in [
            (AppError::AccessTokenExpired, "access token has expired."),
            (AppError::AuthenticationFailed, "authentication failed."),
            (AppError::InvalidRefreshToken, "refresh token is invalid."),
        ] {
            let (status, body) = body_of(err).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body.message, message);
        }
    }

    #[tokio::test]
    async fn body_is_a_single_message_object() {
        let res = AppError::AuthenticationFailed.into_response();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "message": "authentication failed." })
        );
    }

    #[tokio::test]
    async fn invalid_request_is_bad_request() {
        let (status, body) = body_of(AppError::InvalidRequest("refresh_token is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "refresh_token is required");
    }

    #[tokio::test]
    async fn payload_too_large_keeps_message_shape() {
        let (status, body) = body_of(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.message, "request body is too large.");
    }
}
