mod domain_store;
mod empty_domain;
mod integer_domain;

pub(crate) use domain_store::DomainStore;
pub use empty_domain::EmptyDomain;
pub(crate) use integer_domain::IntegerDomain;
