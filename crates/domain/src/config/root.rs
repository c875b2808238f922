use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::answer::AnswerConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::{ServerConfig, MAX_UDP_PAYLOAD, STANDARD_UDP_PAYLOAD};

const LOCAL_CONFIG_PATH: &str = "ferrous-wire.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-wire/config.toml";

/// Main configuration structure for Ferrous Wire
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port, payload limit)
    #[serde(default)]
    pub server: ServerConfig,

    /// Placeholder answer policy
    #[serde(default)]
    pub answer: AnswerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-wire.toml in current directory
    /// 3. /etc/ferrous-wire/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(address) = overrides.answer_address {
            self.answer.address = address;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.socket_addr()?;
        self.answer_address()?;

        if !(STANDARD_UDP_PAYLOAD..=MAX_UDP_PAYLOAD).contains(&self.server.max_udp_payload) {
            return Err(ConfigError::Validation(format!(
                "max_udp_payload must be between {} and {} bytes, got {}",
                STANDARD_UDP_PAYLOAD, MAX_UDP_PAYLOAD, self.server.max_udp_payload
            )));
        }

        Ok(())
    }

    /// Address the UDP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.server.dns_port))
    }

    /// IPv4 address placed in every placeholder answer
    pub fn answer_address(&self) -> Result<Ipv4Addr, ConfigError> {
        self.answer.address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Invalid answer address '{}' (expected IPv4)",
                self.answer.address
            ))
        })
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub answer_address: Option<String>,
}
