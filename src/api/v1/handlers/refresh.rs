use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::api::v1::dto::{refresh_request::RefreshRequest, token_response::TokenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::Tier;

/// POST /auth/refresh
///
/// A blank token is a malformed request (400). A token that is too long or not
/// shaped like a token can never verify, so it is answered like any other invalid
/// refresh token (401).
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(req) = payload?;

    if let Err(violation) = req.validate() {
        return Err(match violation.tier {
            Tier::NotEmpty => AppError::InvalidRequest(violation.message.to_string()),
            Tier::Length | Tier::Pattern => {
                tracing::warn!(reason = violation.message, "refresh token rejected");
                AppError::InvalidRefreshToken
            }
        });
    }

    let out = state.refresh.refresh(&req.refresh_token)?;

    Ok(Json(TokenResponse {
        access_token: out.access_token,
        token_type: out.token_type.to_string(),
        expires_in: out.expires_in,
    }))
}
