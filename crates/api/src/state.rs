use checkip_application::use_cases::ResolveDomainMatchUseCase;
use checkip_domain::config::{ConfigError, SiteUrl, SitesConfig};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_match: Arc<ResolveDomainMatchUseCase>,
    pub sites: Arc<Sites>,
}

/// The configured site URLs, parsed once at startup.
#[derive(Debug, Clone)]
pub struct Sites {
    pub v4: SiteUrl,
    pub v6: SiteUrl,
    pub dual_stack: SiteUrl,
}

impl Sites {
    pub fn from_config(config: &SitesConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            v4: config.v4()?,
            v6: config.v6()?,
            dual_stack: config.dual_stack()?,
        })
    }

    /// Page title, which doubles as the marker for the active nav link.
    pub fn title_for(&self, host: Option<&str>) -> &'static str {
        let Some(host) = host.map(str::to_ascii_lowercase) else {
            return "checkip";
        };

        if host == self.v4.host() {
            "checkip4"
        } else if host == self.v6.host() {
            "checkip6"
        } else {
            "checkip"
        }
    }

    pub fn is_site_host(&self, host: &str) -> bool {
        [&self.v4, &self.v6, &self.dual_stack]
            .iter()
            .any(|site| site.host() == host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sites() -> Sites {
        Sites::from_config(&SitesConfig {
            v4_url: "https://ipv4.example.net".to_string(),
            v6_url: "https://ipv6.example.net".to_string(),
            dual_stack_url: "https://example.net".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_title_by_host() {
        let sites = sites();

        assert_eq!(sites.title_for(Some("ipv4.example.net")), "checkip4");
        assert_eq!(sites.title_for(Some("IPv6.Example.net")), "checkip6");
        assert_eq!(sites.title_for(Some("example.net")), "checkip");
        assert_eq!(sites.title_for(Some("elsewhere.test")), "checkip");
        assert_eq!(sites.title_for(None), "checkip");
    }

    #[test]
    fn test_site_hosts() {
        let sites = sites();

        assert!(sites.is_site_host("ipv6.example.net"));
        assert!(!sites.is_site_host("evil.example.org"));
    }
}
