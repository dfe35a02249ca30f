//! Axum extractors for gate-resolved request data.
//!
//! - [`ResolvedPartition`] - The partition the request was resolved to

mod partition;

pub use partition::ResolvedPartition;
