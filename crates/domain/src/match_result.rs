/// Outcome of checking the requester against a domain's addresses.
///
/// `NoQuery` covers both "no domain was asked for" and "DNS could not tell
/// us". A verdict is only ever produced from a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoQuery,
    Queried { domain_name: String, matched: bool },
}

impl MatchResult {
    pub fn queried(domain_name: impl Into<String>, matched: bool) -> Self {
        MatchResult::Queried {
            domain_name: domain_name.into(),
            matched,
        }
    }

    pub fn is_queried(&self) -> bool {
        matches!(self, MatchResult::Queried { .. })
    }

    /// -1 when nothing was checked, otherwise 1 / 0 for match / no match.
    pub fn gauge_value(&self) -> i8 {
        match self {
            MatchResult::NoQuery => -1,
            MatchResult::Queried { matched: true, .. } => 1,
            MatchResult::Queried { matched: false, .. } => 0,
        }
    }

    /// Suffix appended to the `<family>: <address>` line, empty for `NoQuery`.
    pub fn describe(&self) -> String {
        match self {
            MatchResult::NoQuery => String::new(),
            MatchResult::Queried {
                domain_name,
                matched: true,
            } => format!(" does match domain name '{}'", domain_name),
            MatchResult::Queried {
                domain_name,
                matched: false,
            } => format!(" does not match domain name '{}'", domain_name),
        }
    }
}
