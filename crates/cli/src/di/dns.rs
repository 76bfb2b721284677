use checkip_application::ports::DnsResolver;
use checkip_domain::Config;
use checkip_infrastructure::dns::UpstreamResolver;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<dyn DnsResolver>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let timeout = Duration::from_millis(config.dns.query_timeout_ms);
        let upstream = UpstreamResolver::public(timeout);

        info!(
            servers = ?upstream.servers(),
            timeout_ms = config.dns.query_timeout_ms,
            "DNS services initialized"
        );

        Self {
            resolver: Arc::new(upstream),
        }
    }
}
