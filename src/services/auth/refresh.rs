use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::services::auth::token_codec::{TokenCodec, TokenError};

/// Service-level return type to keep handlers thin.
#[derive(Clone, Debug)]
pub struct IssuedAccessToken {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until expiry.
    pub expires_in: u64,
}

/// Exchanges a refresh token for a new access token.
///
/// - expired and tampered refresh tokens collapse into `InvalidRefreshToken`
/// - the presented refresh token is not rotated or revoked
#[derive(Clone, Debug)]
pub struct RefreshExchange {
    refresh: TokenCodec,
    access: TokenCodec,
    access_ttl: Duration,
}

impl RefreshExchange {
    pub fn new(refresh: TokenCodec, access: TokenCodec, access_ttl: Duration) -> Self {
        Self {
            refresh,
            access,
            access_ttl,
        }
    }

    pub fn refresh(&self, refresh_token: &str) -> Result<IssuedAccessToken, AppError> {
        self.refresh_at(refresh_token, Utc::now())
    }

    pub fn refresh_at(
        &self,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedAccessToken, AppError> {
        let verified = self.refresh.verify_at(refresh_token, now).map_err(|e| {
            let reason = match e {
                TokenError::Expired => "expired",
                _ => "invalid_signature",
            };
            warn!(reason, "refresh token rejected");
            AppError::InvalidRefreshToken
        })?;

        let access_token = self
            .access
            .issue_at(&verified.subject, self.access_ttl, now)
            .map_err(|_| AppError::Internal)?;

        debug!(user_id = %verified.subject, "access token refreshed");

        Ok(IssuedAccessToken {
            access_token,
            token_type: "Bearer",
            expires_in: u64::try_from(self.access_ttl.num_seconds()).unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token_codec::TokenKind;

    const ACCESS_SECRET: &[u8] = b"access-secret-that-is-long-enough-for-hs256";
    const REFRESH_SECRET: &[u8] = b"refresh-secret-that-is-long-enough-for-hs256";

    fn codecs() -> (TokenCodec, TokenCodec) {
        (
            TokenCodec::new(TokenKind::Access, ACCESS_SECRET, 0),
            TokenCodec::new(TokenKind::Refresh, REFRESH_SECRET, 0),
        )
    }

    fn exchange() -> RefreshExchange {
        let (access, refresh) = codecs();
        RefreshExchange::new(refresh, access, Duration::seconds(600))
    }

    #[test]
    fn valid_refresh_token_yields_access_token_for_same_subject() {
        let (access, refresh) = codecs();
        let refresh_token = refresh.issue("alice", Duration::days(30)).unwrap();

        let issued = exchange().refresh(&refresh_token).unwrap();

        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 600);
        assert_eq!(access.verify(&issued.access_token).unwrap().subject, "alice");
    }

    #[test]
    fn refresh_token_stays_usable() {
        let (_, refresh) = codecs();
        let refresh_token = refresh.issue("alice", Duration::days(30)).unwrap();
        let exchange = exchange();

        assert!(exchange.refresh(&refresh_token).is_ok());
        assert!(exchange.refresh(&refresh_token).is_ok());
    }

    #[test]
    fn expired_refresh_token_is_invalid() {
        let (_, refresh) = codecs();
        let refresh_token = refresh.issue("alice", Duration::seconds(-1)).unwrap();

        assert!(matches!(
            exchange().refresh(&refresh_token),
            Err(AppError::InvalidRefreshToken)
        ));
    }

    #[test]
    fn tampered_refresh_token_is_invalid() {
        let (_, refresh) = codecs();
        let mut refresh_token = refresh.issue("alice", Duration::days(30)).unwrap();
        let last = refresh_token.pop().unwrap();
        refresh_token.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(
            exchange().refresh(&refresh_token),
            Err(AppError::InvalidRefreshToken)
        ));
    }

    #[test]
    fn access_token_cannot_be_used_as_refresh_token() {
        let (access, _) = codecs();
        let access_token = access.issue("alice", Duration::seconds(600)).unwrap();

        assert!(matches!(
            exchange().refresh(&access_token),
            Err(AppError::InvalidRefreshToken)
        ));
    }
}
