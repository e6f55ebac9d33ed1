use std::str::FromStr;

use chrono::Duration;
use credentials::BadgeTemplate;
use tracing::Level;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value \"{value}\": {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings of the walkthrough, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub participant_name: String,
    pub issuer_name: String,
    pub issuer_url: String,
    /// Days between issuance and expiration, `None` for no expiration.
    pub validity_days: Option<u32>,
    pub generate_verifier_keys: bool,
    pub log_level: Level,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let template = BadgeTemplate::default();

        Self {
            participant_name: template.participant_name,
            issuer_name: template.issuer_name,
            issuer_url: template.issuer_url,
            validity_days: Some(730),
            generate_verifier_keys: true,
            log_level: Level::INFO,
        }
    }
}

impl DemoConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let validity_days = match parse_var(&lookup, "CREDENTIAL_VALIDITY_DAYS", |value| u32::from_str(value))? {
            None => defaults.validity_days,
            Some(0) => None,
            Some(days) => Some(days),
        };

        Ok(Self {
            participant_name: lookup("PARTICIPANT_NAME").unwrap_or(defaults.participant_name),
            issuer_name: lookup("ISSUER_NAME").unwrap_or(defaults.issuer_name),
            issuer_url: lookup("ISSUER_URL").unwrap_or(defaults.issuer_url),
            validity_days,
            generate_verifier_keys: parse_var(&lookup, "GENERATE_VERIFIER_KEYS", parse_bool)?
                .unwrap_or(defaults.generate_verifier_keys),
            log_level: parse_var(&lookup, "LOG_LEVEL", |value| Level::from_str(value))?.unwrap_or(defaults.log_level),
        })
    }

    /// Badge claims matching this configuration.
    pub fn badge_template(&self) -> BadgeTemplate {
        BadgeTemplate {
            participant_name: self.participant_name.clone(),
            issuer_name: self.issuer_name.clone(),
            issuer_url: self.issuer_url.clone(),
            validity: self.validity_days.map(|days| Duration::days(days.into())),
            ..Default::default()
        }
    }
}

fn parse_var<F, T, P, E>(lookup: &F, name: &'static str, parse: P) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    lookup(name)
        .map(|value| {
            parse(value.trim()).map_err(|err| ConfigError::InvalidValue {
                name,
                value: value.clone(),
                reason: err.to_string(),
            })
        })
        .transpose()
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err("expected true or false".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        DemoConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.participant_name, "Alice Doe");
        assert_eq!(config.issuer_name, "DevFest Mt Kenya");
        assert_eq!(config.validity_days, Some(730));
        assert!(config.generate_verifier_keys);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PARTICIPANT_NAME", "Bob Kamau"),
            ("CREDENTIAL_VALIDITY_DAYS", "0"),
            ("GENERATE_VERIFIER_KEYS", "false"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.participant_name, "Bob Kamau");
        assert_eq!(config.validity_days, None);
        assert!(!config.generate_verifier_keys);
        assert_eq!(config.log_level, Level::DEBUG);

        let template = config.badge_template();
        assert_eq!(template.participant_name, "Bob Kamau");
        assert!(template.validity.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = config(&[("CREDENTIAL_VALIDITY_DAYS", "two years")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "CREDENTIAL_VALIDITY_DAYS", .. }));

        let err = config(&[("GENERATE_VERIFIER_KEYS", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "GENERATE_VERIFIER_KEYS", .. }));

        assert!(config(&[("LOG_LEVEL", "loud")]).is_err());
    }
}
