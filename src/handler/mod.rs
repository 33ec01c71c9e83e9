//! Request handler module
//!
//! Entry point for request processing: method check, static file and
//! directory dispatch, and the final header pass every response goes through.

pub mod listing;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
