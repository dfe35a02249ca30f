//! Resolved partition extractor.
//!
//! Exposes the partition assigned by the partition middleware to handlers
//! standing in for the storage engine.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};

use ddx_tenancy::PartitionId;

/// The partition a request was resolved to.
///
/// Inserted into request extensions by the partition middleware and
/// extracted by downstream handlers. Extraction fails with a 500 when the
/// middleware is not installed on the route.
///
/// # Example
///
/// ```rust,ignore
/// use ddx_gate::extractors::ResolvedPartition;
///
/// async fn handler(ResolvedPartition(partition): ResolvedPartition) {
///     println!("Partition: {}", partition);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPartition(pub PartitionId);

impl ResolvedPartition {
    /// Returns the partition id.
    pub fn partition(&self) -> PartitionId {
        self.0
    }
}

impl std::fmt::Display for ResolvedPartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S> FromRequestParts<S> for ResolvedPartition
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<ResolvedPartition>().copied().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Partition middleware not installed",
        ))
    }
}
