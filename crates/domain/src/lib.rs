//! checkip domain layer
pub mod address;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod match_result;
pub mod response_format;
pub mod subnet;

pub use address::{AddressFamily, ClassifiedAddress};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use match_result::MatchResult;
pub use response_format::ResponseFormat;
pub use subnet::{prefix_contains, SubnetSizes};
