//! axum/tower integration for `hw-core` security headers.

pub mod app;
pub mod observability;
pub mod routes;
pub mod security;
pub mod shutdown;

pub use security::{security_headers, SecurityHeadersLayer, SecurityHeadersService};
