//! Format validation for form fields.
//!
//! A [`ValidationRule`] is a fixed set of regexes tied to one [`FieldKind`]; an
//! input passes when every regex matches. The pipelines never look at patterns
//! directly, they ask a [`FormatValidator`] instead, so rules can be swapped
//! (config file, tests) without touching pipeline code.

use crate::error::{AppError, AppResult};
use crate::models::field::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// E-mail style identifier.
pub const DEFAULT_IDENTIFIER_PATTERNS: &[&str] = &[r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$"];

/// 8 to 20 characters with at least one letter, one digit and one symbol.
pub const DEFAULT_PASSWORD_PATTERNS: &[&str] = &[r"^.{8,20}$", r"[A-Za-z]", r"[0-9]", r"[^A-Za-z0-9]"];

/// 1 to 10 Hangul syllables, Latin letters or digits.
pub const DEFAULT_NICKNAME_PATTERNS: &[&str] = &[r"^[가-힣A-Za-z0-9]{1,10}$"];

static DEFAULT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    let compile = |kind, patterns: &[&str]| {
        ValidationRule::new(kind, patterns.iter().copied()).expect("built-in patterns compile")
    };

    RuleSet {
        identifier: compile(FieldKind::Identifier, DEFAULT_IDENTIFIER_PATTERNS),
        password: compile(FieldKind::Password, DEFAULT_PASSWORD_PATTERNS),
        nickname: compile(FieldKind::Nickname, DEFAULT_NICKNAME_PATTERNS),
    }
});

/// Immutable pattern set for one field kind.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    kind: FieldKind,
    patterns: Vec<Regex>,
}

impl ValidationRule {
    pub fn new<I, S>(kind: FieldKind, patterns: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()).map_err(|source| AppError::Pattern { kind, source }))
            .collect::<AppResult<Vec<_>>>()?;

        if patterns.is_empty() {
            return Err(AppError::EmptyRule(kind));
        }

        Ok(Self { kind, patterns })
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|re| re.as_str())
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.patterns.iter().all(|re| re.is_match(input))
    }
}

/// Checks `input` against `rule`. Total: any string, including the empty one,
/// yields a bool.
pub fn matches(input: &str, rule: &ValidationRule) -> bool {
    rule.is_match(input)
}

/// What the view-models depend on to decide whether a value is well-formed.
pub trait FormatValidator: Send + Sync {
    fn check(&self, input: &str, kind: FieldKind) -> bool;
}

/// One rule per field kind.
#[derive(Debug, Clone)]
pub struct RuleSet {
    identifier: ValidationRule,
    password: ValidationRule,
    nickname: ValidationRule,
}

impl Default for RuleSet {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl RuleSet {
    /// Replaces the rule for `rule.kind()`, keeping the others.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        match rule.kind() {
            FieldKind::Identifier => self.identifier = rule,
            FieldKind::Password => self.password = rule,
            FieldKind::Nickname => self.nickname = rule,
        }
        self
    }

    pub fn rule(&self, kind: FieldKind) -> &ValidationRule {
        match kind {
            FieldKind::Identifier => &self.identifier,
            FieldKind::Password => &self.password,
            FieldKind::Nickname => &self.nickname,
        }
    }
}

impl FormatValidator for RuleSet {
    fn check(&self, input: &str, kind: FieldKind) -> bool {
        matches(input, self.rule(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: FieldKind, input: &str) -> bool {
        RuleSet::default().check(input, kind)
    }

    #[test]
    fn identifier_is_email_shaped() {
        assert!(check(FieldKind::Identifier, "user@sopt.org"));
        assert!(check(FieldKind::Identifier, "first.last+tag@mail.example.com"));
        assert!(!check(FieldKind::Identifier, "abc"));
        assert!(!check(FieldKind::Identifier, "user@host"));
        assert!(!check(FieldKind::Identifier, " user@sopt.org"));
        assert!(!check(FieldKind::Identifier, ""));
    }

    #[test]
    fn password_needs_length_and_mix() {
        assert!(check(FieldKind::Password, "abcd123!"));
        assert!(check(FieldKind::Password, "Passw0rd#2024"));
        assert!(!check(FieldKind::Password, "abc12!"), "too short");
        assert!(!check(FieldKind::Password, "abcdefgh1"), "no symbol");
        assert!(!check(FieldKind::Password, "abcdefgh!"), "no digit");
        assert!(!check(FieldKind::Password, "12345678!"), "no letter");
        assert!(!check(FieldKind::Password, "abcdefghij1234567890!"), "too long");
        assert!(!check(FieldKind::Password, ""));
    }

    #[test]
    fn nickname_allows_hangul_latin_digits() {
        assert!(check(FieldKind::Nickname, "진웅"));
        assert!(check(FieldKind::Nickname, "sopt34"));
        assert!(check(FieldKind::Nickname, "가나다라마바사아자차"));
        assert!(!check(FieldKind::Nickname, "가나다라마바사아자차카"), "eleven characters");
        assert!(!check(FieldKind::Nickname, "no spaces"));
        assert!(!check(FieldKind::Nickname, "ㅋㅋ"), "bare jamo");
        assert!(!check(FieldKind::Nickname, ""));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let err = ValidationRule::new(FieldKind::Nickname, ["("]).unwrap_err();
        assert!(matches!(err, AppError::Pattern { kind: FieldKind::Nickname, .. }));
    }

    #[test]
    fn empty_rule_is_rejected() {
        let err = ValidationRule::new(FieldKind::Password, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, AppError::EmptyRule(FieldKind::Password)));
    }

    #[test]
    fn rules_can_be_swapped() {
        let rules = RuleSet::default()
            .with_rule(ValidationRule::new(FieldKind::Identifier, [r"^[a-z]{3,}$"]).unwrap());

        assert!(rules.check("abc", FieldKind::Identifier));
        assert!(!rules.check("user@sopt.org", FieldKind::Identifier));
        // untouched
        assert!(rules.check("abcd123!", FieldKind::Password));
        assert_eq!(rules.rule(FieldKind::Identifier).patterns().collect::<Vec<_>>(), vec![r"^[a-z]{3,}$"]);
    }
}
