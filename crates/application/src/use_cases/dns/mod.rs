mod resolve_domain_match;

pub use resolve_domain_match::ResolveDomainMatchUseCase;
