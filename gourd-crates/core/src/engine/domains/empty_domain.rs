use thiserror::Error;

/// Returned when narrowing a domain would leave it without any value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the domain became empty")]
pub struct EmptyDomain;
