/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - リクエスト単位の認証コンテキスト（AuthCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 * - Authenticated
 */

mod core;
mod types;

pub use self::core::{AuthCtxExtractor, Authenticated};
pub use self::types::AuthCtx;
