/*
 * Responsibility
 * - Handler から見える「認証コンテキスト」の型 (1 リクエストにつき 1 つ)
 * - gate (middleware) が request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - プロセス全体で共有する "current context" は持たない。リクエストと一緒に生まれて捨てられる
 * - authenticated == principal.is_some() なので、principal 無しの認証済み状態は表現できない
 */
use crate::services::auth::Principal;

#[derive(Debug, Clone, Default)]
pub struct AuthCtx {
    principal: Option<Principal>,
}

impl AuthCtx {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Marks the request authenticated.
    ///
    /// # Panics
    /// If a principal was already set for this request.
    pub fn set(&mut self, principal: Principal) {
        assert!(
            self.principal.is_none(),
            "AuthCtx::set called twice for the same request"
        );
        self.principal = Some(principal);
    }

    pub fn get(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}
