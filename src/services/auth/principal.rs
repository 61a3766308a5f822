//! Subject → Principal resolution.
//!
//! The user store is an external collaborator reached through `UserLookup`.
//! Resolution is bounded by a timeout; every failure mode stays distinguishable
//! here so the gate can log it, even though they all collapse to one client error.
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

/// The authenticated identity handed to downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: String,
    pub user_name: String,
    pub image_url: Option<String>,
}

/// Lookup-by-id capability over the user store.
///
/// - `Ok(Some(_))`: user exists
/// - `Ok(None)`: no such user
/// - `Err(_)`: backend failure (the gate treats it as authentication failure)
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Principal>, RepoError>;
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown subject")]
    UnknownSubject,
    #[error("user lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("user lookup failed: {0}")]
    Lookup(#[from] RepoError),
}

impl ResolveError {
    /// Short reason used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnknownSubject => "unknown_subject",
            Self::Timeout(_) => "lookup_timeout",
            Self::Lookup(_) => "lookup_failed",
        }
    }
}

#[derive(Clone)]
pub struct PrincipalResolver {
    users: Arc<dyn UserLookup>,
    timeout: Duration,
}

impl std::fmt::Debug for PrincipalResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrincipalResolver")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PrincipalResolver {
    pub fn new(users: Arc<dyn UserLookup>, timeout: Duration) -> Self {
        Self { users, timeout }
    }

    pub async fn resolve(&self, subject: &str) -> Result<Principal, ResolveError> {
        match tokio::time::timeout(self.timeout, self.users.find_by_id(subject)).await {
            Ok(found) => found?.ok_or(ResolveError::UnknownSubject),
            Err(_) => Err(ResolveError::Timeout(self.timeout)),
        }
    }
}
