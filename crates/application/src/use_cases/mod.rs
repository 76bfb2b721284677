pub mod dns;

pub use dns::ResolveDomainMatchUseCase;
