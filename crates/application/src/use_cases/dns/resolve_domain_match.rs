use crate::ports::{DnsResolution, DnsResolver};
use checkip_domain::{
    prefix_contains, ClassifiedAddress, DnsQuery, DomainError, DomainName, MatchResult,
    RecordType, SubnetSizes,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Decides whether the requester sits inside the address space a domain
/// advertises.
pub struct ResolveDomainMatchUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainMatchUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Both record types are looked up concurrently and each outcome is
    /// kept, so a failed AAAA lookup never hides a usable A answer (and
    /// the other way round). Only the lookup for the requester's own family
    /// decides the verdict. Without a usable answer for that family the
    /// result is `NoQuery`.
    #[instrument(skip(self, address, domain), fields(address = %address, domain = domain.map(DomainName::as_str)))]
    pub async fn execute(
        &self,
        address: &ClassifiedAddress,
        domain: Option<&DomainName>,
        subnets: SubnetSizes,
    ) -> MatchResult {
        let Some(domain) = domain else {
            return MatchResult::NoQuery;
        };

        let a_query = DnsQuery::for_name(domain, RecordType::A);
        let aaaa_query = DnsQuery::for_name(domain, RecordType::AAAA);

        let (a_result, aaaa_result) = tokio::join!(
            self.resolver.resolve(&a_query),
            self.resolver.resolve(&aaaa_query),
        );

        log_outcome(&a_query, &a_result);
        log_outcome(&aaaa_query, &aaaa_result);

        let (Some(family), Some(remote_ip)) = (address.family(), address.ip()) else {
            debug!("Remote address has no family, skipping domain match");
            return MatchResult::NoQuery;
        };

        let lookup = match RecordType::for_family(family) {
            RecordType::A => a_result,
            RecordType::AAAA => aaaa_result,
        };
        let prefix = subnets.for_family(family);

        let resolution = match lookup {
            Ok(resolution) => resolution,
            Err(_) => return MatchResult::NoQuery,
        };

        let matched = resolution
            .addresses
            .iter()
            .any(|record| prefix_contains(*record, remote_ip, prefix));

        debug!(
            matched,
            prefix,
            records = resolution.addresses.len(),
            "Domain match evaluated"
        );

        MatchResult::queried(domain.as_str(), matched)
    }
}

fn log_outcome(query: &DnsQuery, result: &Result<DnsResolution, DomainError>) {
    match result {
        Ok(resolution) => debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            addresses = resolution.addresses.len(),
            upstream = ?resolution.upstream_server,
            "Lookup succeeded"
        ),
        Err(e) if e.is_transport_error() => warn!(
            domain = %query.domain,
            record_type = %query.record_type,
            error = %e,
            "Lookup failed to reach upstream"
        ),
        Err(e) => debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            error = %e,
            "Lookup returned no usable answer"
        ),
    }
}
