use super::template;
use crate::utils::{escape, NavUrls};
use checkip_domain::{ClassifiedAddress, MatchResult};

const BODY_TEMPLATE: &str = include_str!("../../assets/body.html");
const CLIENT_SCRIPT: &str = include_str!("../../assets/checkip.js");

const ACTIVE_STYLE: &str = r#"style="font-weight: bold""#;

pub(super) fn render(
    address: &ClassifiedAddress,
    match_result: &MatchResult,
    urls: &NavUrls,
    title: &str,
) -> Result<String, serde_json::Error> {
    let v4_literal = escape::script_string(&urls.v4)?;
    let v6_literal = escape::script_string(&urls.v6)?;

    let script = template::fill(CLIENT_SCRIPT, |name| match name {
        "ipv4Url" => Some(v4_literal.clone()),
        "ipv6Url" => Some(v6_literal.clone()),
        _ => None,
    });

    let active = |marker: &str| {
        if title == marker {
            ACTIVE_STYLE.to_string()
        } else {
            String::new()
        }
    };

    Ok(template::fill(BODY_TEMPLATE, |name| match name {
        "title" => Some(escape::html(title)),
        "ipv4Url" => Some(escape::html(&urls.v4)),
        "ipv6Url" => Some(escape::html(&urls.v6)),
        "ipv4n6Url" => Some(escape::html(&urls.dual_stack)),
        "ipv4Active" => Some(active("checkip4")),
        "ipv6Active" => Some(active("checkip6")),
        "ipv4n6Active" => Some(active("checkip")),
        "pageIP" => Some(escape::html(&address.to_string())),
        "match" => Some(escape::html(&match_result.describe())),
        "script" => Some(script.clone()),
        _ => None,
    }))
}
