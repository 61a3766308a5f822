/*
 * Responsibility
 * - GET /me: 認証済み principal を返す
 * - 認証必須の downstream policy の例 (匿名なら Authenticated extractor が 401)
 */
use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::Authenticated;

pub async fn me(Authenticated(principal): Authenticated) -> Json<MeResponse> {
    Json(MeResponse::from(principal))
}
