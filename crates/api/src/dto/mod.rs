pub mod check_ip;

pub use check_ip::{CheckIpParams, CheckIpResponse};
