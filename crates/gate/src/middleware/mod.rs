//! HTTP middleware for the gateway.
//!
//! This module contains the Axum middleware that makes up the gate:
//!
//! - [`auth`] - Bearer-token authentication (runs first)
//! - [`partition`] - Tenant resolution and partition enforcement
//!
//! Both are installed with `axum::middleware::from_fn_with_state`; the auth
//! middleware is layered outermost so unauthenticated requests never reach
//! tenant resolution.

pub mod auth;
pub mod partition;

pub use auth::auth_middleware;
pub use partition::partition_middleware;
