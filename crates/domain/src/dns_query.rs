use crate::{DomainName, RecordType};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    pub fn for_name(name: &DomainName, record_type: RecordType) -> Self {
        Self::new(name.as_str(), record_type)
    }
}
