//! HTTP protocol layer module
//!
//! Protocol helpers shared by the request handler: path translation, MIME
//! detection, conditional requests, response builders and the isolation
//! headers.

pub mod body;
pub mod conditional;
pub mod isolation;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used items
pub use body::ResponseBody;
pub use isolation::apply_isolation_headers;
pub use path::translate_path;
pub use response::{
    build_304_response, build_501_response, build_error_response, build_file_response,
    build_html_response, build_redirect_response, escape_html,
};
