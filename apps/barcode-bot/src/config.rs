//! Bot configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. It is read once in `main` and handed to [`crate::AppContext`];
//! nothing reads the environment after startup.

use std::env;
use std::fmt;

/// Default HTTP port (keep-alive + interactions).
pub const DEFAULT_PORT: u16 = 3000;

/// Default role name shown in replies.
pub const DEFAULT_ROLE_NAME: &str = "Paid Sainsburys";

pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";

pub const DEFAULT_BARCODE_SERVICE_URL: &str = "https://barcode.tec-it.com/barcode.ashx";

/// Bot configuration.
#[derive(Clone)]
pub struct BotConfig {
    /// Bot token, used only for command registration
    pub discord_token: String,

    /// Discord application id
    pub application_id: String,

    /// Hex encoded Ed25519 public key for interaction signatures
    pub public_key: String,

    /// Role id that unlocks gated commands
    pub required_role_id: String,

    /// Role name shown to users
    pub required_role_name: String,

    /// HTTP server port
    pub port: u16,

    /// Overwrite the global slash commands at startup
    pub register_commands: bool,

    /// Discord REST base URL
    pub discord_api_base: String,

    /// Barcode image service base URL
    pub barcode_service_url: String,

    /// Optional footer icon for embeds
    pub footer_icon_url: Option<String>,
}

impl BotConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingRequired(key.to_string()))
        };

        let config = BotConfig {
            discord_token: required("DISCORD_TOKEN")?,
            application_id: required("DISCORD_APPLICATION_ID")?,
            public_key: required("DISCORD_PUBLIC_KEY")?.trim().to_string(),
            required_role_id: required("REQUIRED_ROLE_ID")?,

            required_role_name: lookup("REQUIRED_ROLE_NAME")
                .unwrap_or_else(|| DEFAULT_ROLE_NAME.to_string()),

            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            register_commands: lookup("REGISTER_COMMANDS")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REGISTER_COMMANDS".to_string()))?,

            discord_api_base: lookup("DISCORD_API_BASE")
                .unwrap_or_else(|| DEFAULT_DISCORD_API_BASE.to_string()),

            barcode_service_url: lookup("BARCODE_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_BARCODE_SERVICE_URL.to_string()),

            footer_icon_url: lookup("FOOTER_ICON_URL").filter(|v| !v.is_empty()),
        };

        if !matches!(hex::decode(&config.public_key), Ok(key) if key.len() == 32) {
            return Err(ConfigError::InvalidValue("DISCORD_PUBLIC_KEY".to_string()));
        }

        Ok(config)
    }
}

// The token must never end up in logs.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("public_key", &self.public_key)
            .field("required_role_id", &self.required_role_id)
            .field("required_role_name", &self.required_role_name)
            .field("port", &self.port)
            .field("register_commands", &self.register_commands)
            .field("discord_api_base", &self.discord_api_base)
            .field("barcode_service_url", &self.barcode_service_url)
            .field("footer_icon_url", &self.footer_icon_url)
            .finish()
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) const TEST_PUBLIC_KEY: &str =
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    pub(crate) fn vars(extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = [
            ("DISCORD_TOKEN", "token-123"),
            ("DISCORD_APPLICATION_ID", "1100"),
            ("DISCORD_PUBLIC_KEY", TEST_PUBLIC_KEY),
            ("REQUIRED_ROLE_ID", "42"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        for (k, v) in extra {
            map.insert(k.to_string(), v.to_string());
        }
        map
    }

    fn load(map: &HashMap<String, String>) -> Result<BotConfig, ConfigError> {
        BotConfig::from_lookup(|key| map.get(key).cloned())
    }

    /// Valid config for other modules' tests.
    pub(crate) fn test_config(extra: &[(&str, &str)]) -> BotConfig {
        load(&vars(extra)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = load(&vars(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.register_commands);
        assert_eq!(config.required_role_name, "Paid Sainsburys");
        assert_eq!(config.discord_api_base, "https://discord.com/api/v10");
        assert_eq!(
            config.barcode_service_url,
            "https://barcode.tec-it.com/barcode.ashx"
        );
        assert!(config.footer_icon_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&vars(&[
            ("PORT", "8080"),
            ("REGISTER_COMMANDS", "false"),
            ("REQUIRED_ROLE_NAME", "Staff"),
            ("FOOTER_ICON_URL", "https://cdn.example.com/icon.png"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.register_commands);
        assert_eq!(config.required_role_name, "Staff");
        assert_eq!(
            config.footer_icon_url.as_deref(),
            Some("https://cdn.example.com/icon.png")
        );
    }

    #[test]
    fn test_missing_required() {
        let mut map = vars(&[]);
        map.remove("DISCORD_TOKEN");
        assert_eq!(
            load(&map).unwrap_err(),
            ConfigError::MissingRequired("DISCORD_TOKEN".to_string())
        );

        let map = vars(&[("REQUIRED_ROLE_ID", "  ")]);
        assert_eq!(
            load(&map).unwrap_err(),
            ConfigError::MissingRequired("REQUIRED_ROLE_ID".to_string())
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&vars(&[("PORT", "http")])).unwrap_err(),
            ConfigError::InvalidValue("PORT".to_string())
        );
        assert_eq!(
            load(&vars(&[("DISCORD_PUBLIC_KEY", "abcd")])).unwrap_err(),
            ConfigError::InvalidValue("DISCORD_PUBLIC_KEY".to_string())
        );
    }

    #[test]
    fn test_public_key_whitespace_is_trimmed() {
        let padded = format!("{TEST_PUBLIC_KEY}\n");
        let config = load(&vars(&[("DISCORD_PUBLIC_KEY", padded.as_str())])).unwrap();
        assert_eq!(config.public_key, TEST_PUBLIC_KEY);
        assert!(crate::signature::SignatureVerifier::from_hex(&config.public_key).is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&vars(&[])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("token-123"));
        assert!(debug.contains("<redacted>"));
    }
}
