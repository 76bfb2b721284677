use checkip_domain::{ClassifiedAddress, MatchResult};
use serde::Serialize;

/// Query parameters of `GET /`. Only the first occurrence of each name
/// counts; unknown names are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckIpParams {
    pub domain: Option<String>,
    pub v4subnet: Option<String>,
    pub v6subnet: Option<String>,
    pub format: Option<String>,
}

impl CheckIpParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "domain" => &mut params.domain,
                "v4subnet" => &mut params.v4subnet,
                "v6subnet" => &mut params.v6subnet,
                "format" => &mut params.format,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

/// JSON body. `match` and `domainName` are present only when a domain was
/// actually checked.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckIpResponse {
    pub address: String,
    pub family: &'static str,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
    #[serde(rename = "domainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

impl CheckIpResponse {
    pub fn new(address: &ClassifiedAddress, match_result: &MatchResult) -> Self {
        let (matched, domain_name) = match match_result {
            MatchResult::NoQuery => (None, None),
            MatchResult::Queried {
                domain_name,
                matched,
            } => (Some(*matched), Some(domain_name.clone())),
        };

        Self {
            address: address.text().to_string(),
            family: address.family_label(),
            matched,
            domain_name,
        }
    }
}
