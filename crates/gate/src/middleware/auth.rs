//! Authentication middleware.
//!
//! Runs the [`AuthGate`](crate::auth::AuthGate) check on every request
//! before any other gate stage, rejecting unauthenticated requests with a
//! 401 OperationOutcome.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::AuthDecision;
use crate::context::RequestContext;
use crate::error::GateError;
use crate::state::GateState;

/// Ensures the request carries a [`RequestContext`] extension and returns
/// a snapshot of it.
///
/// A context inserted upstream (the host pipeline's internal-origin marker)
/// is honored; otherwise an external context is captured from the request.
pub(crate) fn ensure_context(request: Request) -> (Request, RequestContext) {
    if let Some(ctx) = request.extensions().get::<RequestContext>() {
        let ctx = ctx.clone();
        return (request, ctx);
    }

    let (parts, body) = request.into_parts();
    let ctx = RequestContext::external_from_parts(&parts);
    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(ctx.clone());
    (request, ctx)
}

/// Middleware enforcing the bearer-token auth gate.
///
/// On success the request's context is marked authenticated (for verified
/// credentials) and processing continues; on failure the request is answered
/// immediately with a 401.
pub async fn auth_middleware(
    State(state): State<GateState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut request, _) = ensure_context(request);

    let path = request.uri().path().to_string();
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match state.auth_gate().check(&path, auth_header.as_deref()) {
        Ok(decision) => {
            if decision == AuthDecision::Verified {
                if let Some(ctx) = request.extensions_mut().get_mut::<RequestContext>() {
                    ctx.mark_authenticated();
                }
            }
            next.run(request).await
        }
        Err(err) => GateError::from(err).into_response(),
    }
}
