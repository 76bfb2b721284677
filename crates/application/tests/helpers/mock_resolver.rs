#![allow(dead_code)]

use async_trait::async_trait;
use checkip_application::ports::{DnsResolution, DnsResolver};
use checkip_domain::{DnsQuery, DomainError, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

type Key = (String, RecordType);

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<Key, Vec<IpAddr>>>>,
    errors: Arc<RwLock<HashMap<Key, DomainError>>>,
    delays: Arc<RwLock<HashMap<RecordType, Duration>>>,
    call_count: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, record_type: RecordType, addresses: &[&str]) {
        let addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), addresses);
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), error);
    }

    pub fn set_delay(&self, record_type: RecordType, delay: Duration) {
        self.delays.write().unwrap().insert(record_type, delay);
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Highest number of lookups that were pending at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.read().unwrap().get(&query.record_type).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let key = (query.domain.to_string(), query.record_type);

        if let Some(error) = self.errors.read().unwrap().get(&key) {
            return Err(error.clone());
        }

        match self.responses.read().unwrap().get(&key) {
            Some(addresses) if !addresses.is_empty() => Ok(DnsResolution::new(addresses.clone())),
            _ => Err(DomainError::NoRecords {
                domain: query.domain.to_string(),
                record_type: query.record_type.as_str(),
            }),
        }
    }
}
