use crate::utils::escape;
use checkip_domain::{ClassifiedAddress, MatchResult};
use std::fmt::Write;

const METRIC: &str = "checkip_match_domain";

pub(super) fn render(address: &ClassifiedAddress, match_result: &MatchResult) -> String {
    let mut labels = format!(
        "family=\"{}\",address=\"{}\"",
        address.family_label(),
        escape::prometheus_label(address.text())
    );
    if let MatchResult::Queried { domain_name, .. } = match_result {
        let _ = write!(
            labels,
            ",domainName=\"{}\"",
            escape::prometheus_label(domain_name)
        );
    }

    format!(
        "# HELP {METRIC} Whether the address matches the domain name records (1 match, 0 no match, -1 not checked).\n\
         # TYPE {METRIC} gauge\n\
         {METRIC}{{{labels}}} {value}\n",
        value = match_result.gauge_value()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line(body: &str) -> &str {
        body.lines()
            .find(|line| !line.starts_with('#'))
            .unwrap()
    }

    #[test]
    fn test_header_lines() {
        let body = render(&ClassifiedAddress::classify("203.0.113.5"), &MatchResult::NoQuery);
        let lines: Vec<&str> = body.lines().collect();

        assert!(lines[0].starts_with("# HELP checkip_match_domain "));
        assert_eq!(lines[1], "# TYPE checkip_match_domain gauge");
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn test_gauge_values() {
        let address = ClassifiedAddress::classify("203.0.113.5");

        assert_eq!(
            sample_line(&render(&address, &MatchResult::NoQuery)),
            r#"checkip_match_domain{family="IPv4",address="203.0.113.5"} -1"#
        );
        assert_eq!(
            sample_line(&render(&address, &MatchResult::queried("example.com", true))),
            r#"checkip_match_domain{family="IPv4",address="203.0.113.5",domainName="example.com"} 1"#
        );
        assert_eq!(
            sample_line(&render(&address, &MatchResult::queried("example.com", false))),
            r#"checkip_match_domain{family="IPv4",address="203.0.113.5",domainName="example.com"} 0"#
        );
    }

    #[test]
    fn test_label_escaping() {
        let address = ClassifiedAddress::classify("bad\"addr");

        assert_eq!(
            sample_line(&render(&address, &MatchResult::NoQuery)),
            r#"checkip_match_domain{family="unknown",address="bad\"addr"} -1"#
        );
    }
}
