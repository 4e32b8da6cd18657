use crate::error::{AppResult, ConfigError, ConfigErrorKind};
use crate::models::field::FieldKind;
use crate::validation::{RuleSet, ValidationRule};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub rules_path: Option<PathBuf>, // e.g. "rules.toml"
    pub log_filter: String,          // e.g. "formflow=debug"
    pub secure_entry: bool,          // mask the password in `state` output
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let secure_entry = match get("FORMFLOW_SECURE_ENTRY") {
            None => true,
            Some(v) => parse_bool(&v).ok_or_else(|| ConfigError {
                path: PathBuf::from("<env>"),
                source: ConfigErrorKind::InvalidEnv("FORMFLOW_SECURE_ENTRY".into(), v.clone()),
            })?,
        };

        Ok(Self {
            rules_path: get("FORMFLOW_RULES").filter(|s| !s.is_empty()).map(PathBuf::from),
            log_filter: get("FORMFLOW_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            secure_entry,
        })
    }

    /// Rules from `rules_path`, or the built-in ones.
    pub fn rule_set(&self) -> AppResult<RuleSet> {
        match &self.rules_path {
            Some(path) => RulesConfig::load(path)?.into_rule_set(),
            None => Ok(RuleSet::default()),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Rules file layout:
///
/// ```toml
/// [identifier]
/// patterns = ['^[a-z0-9]{4,12}$']
///
/// [password]
/// patterns = ['^.{8,20}$', '[0-9]']
/// ```
///
/// Tables left out keep the built-in rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    pub identifier: Option<RuleConfig>,
    pub password: Option<RuleConfig>,
    pub nickname: Option<RuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub patterns: Vec<String>,
}

impl RulesConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| ConfigError {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        let cfg: Self = toml::from_str(&data).map_err(|e| ConfigError {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Parse(e),
        })?;
        tracing::debug!(path = %path.display(), "loaded rules file");
        Ok(cfg)
    }

    pub fn into_rule_set(self) -> AppResult<RuleSet> {
        let mut rules = RuleSet::default();
        for (kind, rule) in [
            (FieldKind::Identifier, self.identifier),
            (FieldKind::Password, self.password),
            (FieldKind::Nickname, self.nickname),
        ] {
            if let Some(rule) = rule {
                rules = rules.with_rule(ValidationRule::new(kind, &rule.patterns)?);
            }
        }
        Ok(rules)
    }
}
