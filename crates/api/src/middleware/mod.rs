//! HTTP middleware stack for the catalog API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (add unique ID to each request, recorded in the span)

pub mod request_id;
pub mod trace;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use trace::trace_layer;
