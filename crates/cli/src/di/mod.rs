mod dns;
mod use_cases;

use checkip_api::{AppState, Sites};
use checkip_domain::Config;
use std::sync::Arc;

pub use dns::DnsServices;
pub use use_cases::UseCases;

pub fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let dns_services = DnsServices::new(config);
    let use_cases = UseCases::new(&dns_services);
    let sites = Sites::from_config(&config.sites)?;

    Ok(AppState {
        resolve_match: use_cases.resolve_match,
        sites: Arc::new(sites),
    })
}
