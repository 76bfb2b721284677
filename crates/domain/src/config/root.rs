use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::sites::SitesConfig;

/// Main configuration structure for checkip
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Public URLs of the IPv4, IPv6 and dual-stack sites
    #[serde(default)]
    pub sites: SitesConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. checkip.toml in current directory
    /// 3. /etc/checkip/config.toml
    /// 4. Default configuration
    ///
    /// Overrides (environment and command line) are applied on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("checkip.toml").exists() {
            Self::from_file("checkip.toml")?
        } else if std::path::Path::new("/etc/checkip/config.toml").exists() {
            Self::from_file("/etc/checkip/config.toml")?
        } else {
            Self::default()
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.v4_url {
            self.sites.v4_url = url;
        }
        if let Some(url) = overrides.v6_url {
            self.sites.v6_url = url;
        }
        if let Some(url) = overrides.dual_stack_url {
            self.sites.dual_stack_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation(
                "Bind address cannot be empty".to_string(),
            ));
        }

        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout cannot be 0".to_string(),
            ));
        }

        self.sites.v4()?;
        self.sites.v6()?;
        self.sites.dual_stack()?;

        Ok(())
    }
}

/// Values from environment variables or command-line flags
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub v4_url: Option<String>,
    pub v6_url: Option<String>,
    pub dual_stack_url: Option<String>,
    pub log_level: Option<String>,
}
