use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding `auth.password_hash`.
pub const ENV_PASSWORD_HASH: &str = "SIGNBOARD_PASSWORD_HASH";
/// Environment variable overriding `auth.session_secret`.
pub const ENV_SESSION_SECRET: &str = "SIGNBOARD_SESSION_SECRET";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub signs: SignsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SignsConfig {
    /// Directory holding one subdirectory per sign
    pub root: PathBuf,
}

impl Default for SignsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./signs"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// argon2 PHC string of the shared login password
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Token signing secret (hex or raw). Random per process when absent.
    #[serde(default)]
    pub session_secret: Option<String>,
}

impl AppConfig {
    /// Load `config/{env}.yaml`, then apply environment overrides.
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path))?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(hash) = lookup(ENV_PASSWORD_HASH).filter(|v| !v.is_empty()) {
            self.auth.password_hash = Some(hash);
        }
        if let Some(secret) = lookup(ENV_SESSION_SECRET).filter(|v| !v.is_empty()) {
            self.auth.session_secret = Some(secret);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_YAML: &str = r#"
log_level: info
log_dir: ./logs
log_file: signboard.log
use_json: false
rotation: daily
gateway:
  host: 0.0.0.0
  port: 8080
signs:
  root: ./signs
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = AppConfig::from_yaml(DEV_YAML).unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.signs.root, PathBuf::from("./signs"));
        assert!(config.auth.password_hash.is_none());
        assert!(config.auth.session_secret.is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::from_yaml(DEV_YAML).unwrap();
        config.apply_env_overrides(|key| match key {
            ENV_PASSWORD_HASH => Some("$argon2id$stub".to_string()),
            ENV_SESSION_SECRET => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.auth.password_hash.as_deref(), Some("$argon2id$stub"));
        // Empty values do not override.
        assert!(config.auth.session_secret.is_none());
    }

    #[test]
    fn test_missing_gateway_is_an_error() {
        assert!(AppConfig::from_yaml("log_level: info").is_err());
    }
}
