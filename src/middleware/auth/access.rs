//! access token 検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` が無い/別 scheme なら匿名の AuthCtx を入れてそのまま通す
//! - 検証/解決に失敗したらここで `{ "message" }` を返して打ち切る (downstream は実行されない)
//! - 判定ロジック自体は `services::auth::gate` 側

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::GateOutcome;
use crate::state::AppState;

/// Router に認証 gate を掛ける。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let mut auth_ctx = AuthCtx::anonymous();

    match state.gate.authenticate(req.headers()).await {
        GateOutcome::Anonymous => {}
        GateOutcome::Authenticated(principal) => auth_ctx.set(principal),
        GateOutcome::Rejected(kind) => return AppError::from(kind).into_response(),
    }

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    next.run(req).await
}
