use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use hickup_notification::{ResendConfig, SmtpConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: Transport,
    #[serde(default = "default_from")]
    pub from: String,
    /// Operator inbox receiving every inquiry
    #[serde(default)]
    pub to: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            from: default_from(),
            to: String::new(),
        }
    }
}

fn default_from() -> String {
    "Hickup Intake <onboarding@resend.dev>".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and the process environment
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (RESEND_API_KEY, CONTACT_TO, CONTACT_FROM)
    /// 2. Environment variables (HICKUP__EMAIL__TO, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, env::vars().collect())
    }

    /// Same as [`Config::load`] with the environment given as a map
    pub fn load_with_env(
        config_path: Option<String>,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("email.transport", "resend")?
            .set_default("email.from", default_from())?
            .set_default("email.to", "")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("HICKUP")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        if let Some(api_key) = vars.get("RESEND_API_KEY") {
            builder = builder.set_override("resend.api_key", api_key.as_str())?;
        }
        if let Some(to) = vars.get("CONTACT_TO") {
            builder = builder.set_override("email.to", to.as_str())?;
        }
        if let Some(from) = vars.get("CONTACT_FROM") {
            builder = builder.set_override("email.from", from.as_str())?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.to.trim().is_empty() {
            return Err("Contact recipient (email.to) must be configured".to_string());
        }
        if self.email.from.trim().is_empty() {
            return Err("Sender address (email.from) must be configured".to_string());
        }
        if self.email.transport == Transport::Resend && self.resend.api_key.is_empty() {
            return Err("Resend API key (resend.api_key) must be configured".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown logging format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            email: EmailConfig {
                to: "ops@example.com".to_string(),
                ..EmailConfig::default()
            },
            resend: ResendConfig {
                api_key: "re_test".to_string(),
                ..ResendConfig::default()
            },
            smtp: SmtpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_recipient() {
        let mut config = valid_config();
        config.email.to = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_resend_requires_api_key() {
        let mut config = valid_config();
        config.resend.api_key = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_smtp_without_api_key() {
        let mut config = valid_config();
        config.resend.api_key = String::new();
        config.email.transport = Transport::Smtp;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let mut config = valid_config();
        config.logging.format = "xml".to_string();

        assert!(config.validate().is_err());
    }
}
