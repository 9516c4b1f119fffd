//! Request handler module
//!
//! Responsible for request dispatch and the demo's handler functions:
//! view routes rendering bound values as HTML, and record routes
//! returning bound records as plain text.

mod pages;
mod records;
mod router;
mod views;

// Re-export main entry point
pub use router::handle_request;
