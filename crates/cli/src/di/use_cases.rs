use super::DnsServices;
use checkip_application::use_cases::ResolveDomainMatchUseCase;
use std::sync::Arc;

pub struct UseCases {
    pub resolve_match: Arc<ResolveDomainMatchUseCase>,
}

impl UseCases {
    pub fn new(dns: &DnsServices) -> Self {
        Self {
            resolve_match: Arc::new(ResolveDomainMatchUseCase::new(dns.resolver.clone())),
        }
    }
}
