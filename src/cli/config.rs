use std::env;
use std::time::Duration;

use crate::cli::error::CliError;

pub const DEFAULT_HOST: &str = "http://127.0.0.1:8006";

/// Client settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub limit: i64,
    pub timeout: Duration,
    pub sendgrid_api_key: String,
    pub sendgrid_from_email: String,
}

/// Credentials needed to send mail, validated before any API call
#[derive(Debug, Clone)]
pub struct SendgridSettings {
    pub api_key: String,
    pub from_email: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            username: lookup("USERNAME").unwrap_or_default(),
            password: lookup("PASSWORD").unwrap_or_default(),
            limit: lookup("LIMIT").and_then(|v| v.parse().ok()).unwrap_or(40),
            timeout: Duration::from_secs(lookup("TIMEOUT").and_then(|v| v.parse().ok()).unwrap_or(12)),
            sendgrid_api_key: lookup("SENDGRID_API_KEY").unwrap_or_default(),
            sendgrid_from_email: lookup("SENDGRID_FROM_EMAIL").unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> Result<String, CliError> {
        if self.host.is_empty() {
            return Err(CliError::Configuration("No se ha definido el host".to_string()));
        }
        Ok(format!("{}/v2", self.host.trim_end_matches('/')))
    }

    pub fn sendgrid(&self) -> Result<SendgridSettings, CliError> {
        if self.sendgrid_api_key.is_empty() {
            return Err(CliError::Configuration("Falta SENDGRID_API_KEY".to_string()));
        }
        if self.sendgrid_from_email.is_empty() {
            return Err(CliError::Configuration("Falta SENDGRID_FROM_EMAIL".to_string()));
        }
        Ok(SendgridSettings {
            api_key: self.sendgrid_api_key.clone(),
            from_email: self.sendgrid_from_email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.host, DEFAULT_HOST);
        assert_eq!(s.limit, 40);
        assert_eq!(s.timeout, Duration::from_secs(12));
        assert_eq!(s.base_url().unwrap(), "http://127.0.0.1:8006/v2");
    }

    #[test]
    fn timeout_is_read_from_its_own_variable() {
        let s = settings(&[("LIMIT", "100"), ("TIMEOUT", "30")]);
        assert_eq!(s.limit, 100);
        assert_eq!(s.timeout, Duration::from_secs(30));
    }

    #[test]
    fn sendgrid_requires_both_values() {
        let err = settings(&[("SENDGRID_API_KEY", "SG.x")]).sendgrid().unwrap_err();
        assert_eq!(err.to_string(), "Falta SENDGRID_FROM_EMAIL");
        assert!(settings(&[]).sendgrid().is_err());
        let ok = settings(&[("SENDGRID_API_KEY", "SG.x"), ("SENDGRID_FROM_EMAIL", "citas@example.com")]);
        assert_eq!(ok.sendgrid().unwrap().from_email, "citas@example.com");
    }

    #[test]
    fn empty_host_is_a_configuration_error() {
        let s = settings(&[("HOST", "")]);
        assert!(matches!(s.base_url(), Err(CliError::Configuration(_))));
    }
}
