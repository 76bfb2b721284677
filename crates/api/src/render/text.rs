use checkip_domain::{ClassifiedAddress, MatchResult};

pub(super) fn render(address: &ClassifiedAddress, match_result: &MatchResult) -> String {
    format!("{}{}", address, match_result.describe())
}
