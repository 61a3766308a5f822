//! Per-request authentication decision.
//!
//! `NoToken → TokenPresent → Verified → Resolved → Authenticated`, or `Rejected` from
//! any step after `TokenPresent`. Each step yields a `Step`; the first `Reject`
//! ends the walk. The HTTP wiring lives in `middleware::auth::access`.
use axum::http::{HeaderMap, header};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::services::auth::principal::{Principal, PrincipalResolver};
use crate::services::auth::token_codec::{TokenCodec, TokenError};

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    NoToken,
    TokenPresent,
    Verified,
    Resolved,
    Authenticated,
    Rejected,
}

/// Client-facing rejection kinds. Internal causes are only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    AccessTokenExpired,
    AuthenticationFailed,
}

impl From<RejectKind> for AppError {
    fn from(kind: RejectKind) -> Self {
        match kind {
            RejectKind::AccessTokenExpired => AppError::AccessTokenExpired,
            RejectKind::AuthenticationFailed => AppError::AuthenticationFailed,
        }
    }
}

#[derive(Debug)]
pub enum Step<T> {
    Continue(T),
    Reject(RejectKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// No usable credentials; the request proceeds unauthenticated.
    Anonymous,
    Authenticated(Principal),
    Rejected(RejectKind),
}

impl GateOutcome {
    pub fn state(&self) -> GateState {
        match self {
            Self::Anonymous => GateState::NoToken,
            Self::Authenticated(_) => GateState::Authenticated,
            Self::Rejected(_) => GateState::Rejected,
        }
    }
}

/// Returns the token of an `Authorization: Bearer <token>` header.
///
/// The prefix is case-sensitive with exactly one space. Any other scheme, or a
/// header that is not visible ASCII, counts as no token at all.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    access: TokenCodec,
    resolver: PrincipalResolver,
}

impl AuthGate {
    pub fn new(access: TokenCodec, resolver: PrincipalResolver) -> Self {
        Self { access, resolver }
    }

    pub async fn authenticate(&self, headers: &HeaderMap) -> GateOutcome {
        let Some(token) = extract_bearer(headers) else {
            debug!(state = ?GateState::NoToken, "no bearer token, continuing anonymous");
            return GateOutcome::Anonymous;
        };
        debug!(state = ?GateState::TokenPresent, "bearer token present");

        let subject = match self.verify(token) {
            Step::Continue(subject) => subject,
            Step::Reject(kind) => return GateOutcome::Rejected(kind),
        };

        let principal = match self.resolve(&subject).await {
            Step::Continue(principal) => principal,
            Step::Reject(kind) => return GateOutcome::Rejected(kind),
        };

        debug!(state = ?GateState::Authenticated, user_id = %principal.id, "request authenticated");
        GateOutcome::Authenticated(principal)
    }

    fn verify(&self, token: &str) -> Step<String> {
        match self.access.verify(token) {
            Ok(verified) => {
                debug!(state = ?GateState::Verified, "access token verified");
                Step::Continue(verified.subject)
            }
            Err(TokenError::Expired) => {
                warn!(state = ?GateState::Rejected, reason = "expired", "access token rejected");
                Step::Reject(RejectKind::AccessTokenExpired)
            }
            Err(err) => {
                warn!(state = ?GateState::Rejected, reason = "invalid_signature", error = %err, "access token rejected");
                Step::Reject(RejectKind::AuthenticationFailed)
            }
        }
    }

    async fn resolve(&self, subject: &str) -> Step<Principal> {
        match self.resolver.resolve(subject).await {
            Ok(principal) => {
                debug!(state = ?GateState::Resolved, user_id = %principal.id, "principal resolved");
                Step::Continue(principal)
            }
            Err(err) => {
                warn!(
                    state = ?GateState::Rejected,
                    reason = err.reason(),
                    subject = %subject,
                    error = %err,
                    "principal resolution failed"
                );
                Step::Reject(RejectKind::AuthenticationFailed)
            }
        }
    }
}
