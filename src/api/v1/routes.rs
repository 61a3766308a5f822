/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - gate を掛ける範囲もここで決める
 *   - /auth/refresh は gate の外 (期限切れ access token を付けたままでも refresh できるように)
 *   - それ以外は gate を通す
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{me::me, refresh::refresh};
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let gated = access::apply(Router::new().route("/me", get(me)), state);

    Router::new()
        .route("/auth/refresh", post(refresh))
        .merge(gated)
}
