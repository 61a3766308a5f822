use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::Principal;

use super::AuthCtx;

/// Handler で AuthCtx をそのまま受け取るための extractor (匿名アクセスも通す)
/// gate が未適用で extensions に無い場合は匿名として扱う
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts.extensions.get::<AuthCtx>().cloned().unwrap_or_default();
        Ok(AuthCtxExtractor(ctx))
    }
}

/// 認証必須の handler 用。principal が無ければ 401 (AuthenticationFailed)
pub struct Authenticated(pub Principal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .and_then(|ctx| ctx.get().cloned())
            .map(Authenticated)
            .ok_or(AppError::AuthenticationFailed)
    }
}
