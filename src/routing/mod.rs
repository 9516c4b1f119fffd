//! Routing module
//!
//! Provides the request dispatcher's route table:
//! - Route templates with named path segments (`{name}`)
//! - Declaration-order resolution of (method, path) to a handler id
//! - Method-mismatch reporting for 405 responses

mod router;
mod template;

pub use router::{Resolution, RouteId, Router};
