/// Factory: build the gate and the refresh exchange from application settings.
use std::{sync::Arc, time::Duration};

use crate::config::{ConfigError, TokenSettings};
use crate::services::auth::{
    AuthGate, PrincipalResolver, RefreshExchange, TokenCodec, TokenKind, UserLookup,
};

pub fn access_codec(tokens: &TokenSettings) -> TokenCodec {
    TokenCodec::new(
        TokenKind::Access,
        tokens.access_token_secret.as_bytes(),
        tokens.leeway_seconds,
    )
}

pub fn refresh_codec(tokens: &TokenSettings) -> TokenCodec {
    TokenCodec::new(
        TokenKind::Refresh,
        tokens.refresh_token_secret.as_bytes(),
        tokens.leeway_seconds,
    )
}

pub fn build_gate(
    tokens: &TokenSettings,
    users: Arc<dyn UserLookup>,
    lookup_timeout: Duration,
) -> Arc<AuthGate> {
    let resolver = PrincipalResolver::new(users, lookup_timeout);
    Arc::new(AuthGate::new(access_codec(tokens), resolver))
}

pub fn build_refresh_exchange(
    tokens: &TokenSettings,
) -> Result<Arc<RefreshExchange>, ConfigError> {
    let access_ttl = chrono::Duration::try_seconds(tokens.access_token_ttl_seconds)
        .filter(|ttl| *ttl > chrono::Duration::zero())
        .ok_or(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"))?;

    Ok(Arc::new(RefreshExchange::new(
        refresh_codec(tokens),
        access_codec(tokens),
        access_ttl,
    )))
}
