use super::errors::ConfigError;
use http::uri::{InvalidUri, Scheme, Uri};
use serde::{Deserialize, Serialize};

/// The three public faces of the service: reachable over IPv4 only, IPv6
/// only, and dual-stack.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SitesConfig {
    #[serde(default)]
    pub v4_url: String,

    #[serde(default)]
    pub v6_url: String,

    #[serde(default)]
    pub dual_stack_url: String,
}

impl SitesConfig {
    pub fn v4(&self) -> Result<SiteUrl, ConfigError> {
        SiteUrl::parse(&self.v4_url)
    }

    pub fn v6(&self) -> Result<SiteUrl, ConfigError> {
        SiteUrl::parse(&self.v6_url)
    }

    pub fn dual_stack(&self) -> Result<SiteUrl, ConfigError> {
        SiteUrl::parse(&self.dual_stack_url)
    }
}

/// An absolute http(s) URL together with its host, compared against the
/// `Host` and `Origin` of incoming requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    url: String,
    host: String,
}

impl SiteUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::InvalidUrl(
                raw.to_string(),
                "URL is not set".to_string(),
            ));
        }

        let uri: Uri = raw
            .parse()
            .map_err(|e: InvalidUri| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;

        let scheme = uri
            .scheme()
            .ok_or_else(|| ConfigError::InvalidUrl(raw.to_string(), "missing scheme".to_string()))?;
        if *scheme != Scheme::HTTP && *scheme != Scheme::HTTPS {
            return Err(ConfigError::InvalidUrl(
                raw.to_string(),
                format!("unsupported scheme '{}'", scheme),
            ));
        }

        let authority = uri
            .authority()
            .ok_or_else(|| ConfigError::InvalidUrl(raw.to_string(), "missing host".to_string()))?;

        let default_port = if *scheme == Scheme::HTTPS { 443 } else { 80 };
        let host = match authority.port_u16() {
            Some(port) if port != default_port => format!("{}:{}", authority.host(), port),
            _ => authority.host().to_string(),
        };

        Ok(Self {
            url: raw.to_string(),
            host: host.to_ascii_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Host with the port only when it is not the scheme default.
    pub fn host(&self) -> &str {
        &self.host
    }
}
