use serde::Deserialize;

use crate::validation::{Tier, ValidationChain, Violation, is_compact_token};

pub const MAX_REFRESH_TOKEN_LEN: usize = 4096;

/// Request body for `/auth/refresh`.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    // Missing field is reported by `validate` like a blank one.
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: String,
}

impl RefreshRequest {
    pub fn validate(&self) -> Result<(), Violation> {
        ValidationChain::<str>::new()
            .rule(Tier::NotEmpty, "refresh_token is required", |s| {
                !s.trim().is_empty()
            })
            .rule(Tier::Length, "refresh_token is too long", |s| {
                s.len() <= MAX_REFRESH_TOKEN_LEN
            })
            .rule(Tier::Pattern, "refresh_token is malformed", is_compact_token)
            .validate(&self.refresh_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(token: &str) -> RefreshRequest {
        RefreshRequest {
            refresh_token: token.to_string(),
        }
    }

    #[test]
    fn accepts_both_field_spellings() {
        let snake: RefreshRequest = serde_json::from_str(r#"{"refresh_token":"a.b.c"}"#).unwrap();
        let camel: RefreshRequest = serde_json::from_str(r#"{"refreshToken":"a.b.c"}"#).unwrap();
        assert_eq!(snake.refresh_token, "a.b.c");
        assert_eq!(camel.refresh_token, "a.b.c");
    }

    #[test]
    fn missing_field_is_blank() {
        let r: RefreshRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(r.validate().unwrap_err().tier, Tier::NotEmpty);
    }

    #[test]
    fn tiers_are_reported_in_order() {
        assert_eq!(req(" ").validate().unwrap_err().tier, Tier::NotEmpty);
        assert_eq!(
            req(&"x".repeat(MAX_REFRESH_TOKEN_LEN + 1))
                .validate()
                .unwrap_err()
                .tier,
            Tier::Length
        );
        assert_eq!(req("no-dots").validate().unwrap_err().tier, Tier::Pattern);
        assert!(req("aaa.bbb.ccc").validate().is_ok());
    }
}
