use crate::dto::CheckIpResponse;
use checkip_domain::{ClassifiedAddress, MatchResult};

pub(super) fn render(
    address: &ClassifiedAddress,
    match_result: &MatchResult,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&CheckIpResponse::new(address, match_result))
}
