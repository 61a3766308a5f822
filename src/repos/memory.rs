//! In-process user store, keyed by principal id.
//! Stand-in for the users table when no database is wired in (tests, embedders).
use std::collections::HashMap;

use async_trait::async_trait;

use crate::repos::error::RepoError;
use crate::services::auth::principal::{Principal, UserLookup};

#[derive(Clone, Debug, Default)]
pub struct InMemoryUserRepo {
    users: HashMap<String, Principal>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            users: users.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn insert(&mut self, principal: Principal) {
        self.users.insert(principal.id.clone(), principal);
    }
}

#[async_trait]
impl UserLookup for InMemoryUserRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<Principal>, RepoError> {
        Ok(self.users.get(id).cloned())
    }
}
