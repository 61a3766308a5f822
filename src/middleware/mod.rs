/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access::apply (認証 gate), http::apply (request-id/trace/limit/timeout), cors::apply
 */
pub mod auth;
pub mod cors;
pub mod http;
