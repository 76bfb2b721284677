use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A host name that passed RFC 1123 syntax checks.
///
/// The name is kept exactly as given (no case folding) so that it can be
/// echoed back in responses and navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name cannot be empty".to_string(),
            ));
        }

        if raw.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "domain name longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        let labels: Vec<&str> = raw.split('.').collect();
        if labels.len() < 2 {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' needs at least two labels",
                raw
            )));
        }

        for label in &labels {
            validate_label(raw, label)?;
        }

        if labels
            .last()
            .is_some_and(|tld| tld.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' has an all-numeric top-level label",
                raw
            )));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_label(name: &str, label: &str) -> Result<(), DomainError> {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' has a label that is empty or longer than {} characters",
            name, MAX_LABEL_LEN
        )));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' has a label starting or ending with '-'",
            name
        )));
    }

    if !label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' contains characters outside [A-Za-z0-9-]",
            name
        )));
    }

    Ok(())
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
