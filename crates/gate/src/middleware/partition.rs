//! Partition enforcement middleware.
//!
//! Resolves every request to an isolation partition before it reaches the
//! storage hop. The resolved partition is recorded on the request's
//! [`RequestContext`] and exposed to downstream consumers through the
//! [`ResolvedPartition`] extension.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::context::RequestContext;
use crate::error::GateError;
use crate::extractors::ResolvedPartition;
use crate::state::GateState;
use crate::tenant::PartitionHook;

use super::auth::ensure_context;

/// Middleware resolving and enforcing the request's partition.
///
/// The hook is derived from the HTTP method (`GET`/`HEAD` resolve under the
/// read hook, `POST`/`PUT`/`PATCH` under create, everything else under any).
/// Resolution happens once; the result is cached on the context for the
/// rest of the request's life.
pub async fn partition_middleware(
    State(state): State<GateState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut request, ctx) = ensure_context(request);
    let hook = PartitionHook::from_method(request.method());

    match state.resolver().resolve(&ctx, hook) {
        Ok(partition) => {
            if let Some(ctx) = request.extensions_mut().get_mut::<RequestContext>() {
                ctx.assign_partition(partition);
            }
            request.extensions_mut().insert(ResolvedPartition(partition));
            next.run(request).await
        }
        Err(err) => GateError::from(err).into_response(),
    }
}
