//! Ordered input validation.
//!
//! Rules are grouped into tiers (`NotEmpty → Length → Pattern`). Tiers run in that
//! order regardless of declaration order; inside a tier rules run as declared.
//! The first failing rule stops evaluation, so a blank value reports "required"
//! instead of also failing its length and pattern rules.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    NotEmpty,
    Length,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub tier: Tier,
    pub message: &'static str,
}

struct Rule<T: ?Sized> {
    tier: Tier,
    message: &'static str,
    check: fn(&T) -> bool,
}

pub struct ValidationChain<T: ?Sized> {
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized> Default for ValidationChain<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: ?Sized> ValidationChain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `check` returns true when the value passes.
    pub fn rule(mut self, tier: Tier, message: &'static str, check: fn(&T) -> bool) -> Self {
        // keep tiers ordered; stable for rules within the same tier
        let at = self.rules.partition_point(|r| r.tier <= tier);
        self.rules.insert(
            at,
            Rule {
                tier,
                message,
                check,
            },
        );
        self
    }

    pub fn validate(&self, value: &T) -> Result<(), Violation> {
        match self.rules.iter().find(|r| !(r.check)(value)) {
            Some(rule) => Err(Violation {
                tier: rule.tier,
                message: rule.message,
            }),
            None => Ok(()),
        }
    }
}

/// Non-empty runs of `[A-Za-z0-9_-]` separated by exactly two dots.
pub fn is_compact_token(value: &str) -> bool {
    let segments: Vec<&str> = value.split('.').collect();
    segments.len() == 3
        && segments.iter().all(|s| {
            !s.is_empty()
                && s
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ValidationChain<str> {
        // declared out of order on purpose
        ValidationChain::<str>::new()
            .rule(Tier::Pattern, "must be lowercase", |s| {
                s.chars().all(|c| c.is_ascii_lowercase())
            })
            .rule(Tier::Length, "must be <= 5 chars", |s| s.len() <= 5)
            .rule(Tier::NotEmpty, "is required", |s| !s.trim().is_empty())
    }

    #[test]
    fn passes_when_every_tier_passes() {
        assert_eq!(chain().validate("abc"), Ok(()));
    }

    #[test]
    fn blank_stops_at_not_empty() {
        let err = chain().validate("   ").unwrap_err();
        assert_eq!(err.tier, Tier::NotEmpty);
        assert_eq!(err.message, "is required");
    }

    #[test]
    fn length_is_checked_before_pattern() {
        // fails both length and pattern; only length is reported
        let err = chain().validate("ABCDEFG").unwrap_err();
        assert_eq!(err.tier, Tier::Length);
    }

    #[test]
    fn pattern_is_last() {
        let err = chain().validate("ABC").unwrap_err();
        assert_eq!(err.tier, Tier::Pattern);
    }

    #[test]
    fn rules_in_same_tier_keep_declaration_order() {
        let chain = ValidationChain::<str>::new()
            .rule(Tier::Length, "first", |s| s.len() > 10)
            .rule(Tier::Length, "second", |s| s.len() > 20);

        assert_eq!(chain.validate("short").unwrap_err().message, "first");
    }

    #[test]
    fn compact_token_shape() {
        assert!(is_compact_token("aGVhZGVy.cGF5bG9hZA.c2ln-_"));
        assert!(!is_compact_token("a.b"));
        assert!(!is_compact_token("a..c"));
        assert!(!is_compact_token("a.b.c.d"));
        assert!(!is_compact_token("a.b.c="));
        assert!(!is_compact_token("a b.c.d"));
    }
}
