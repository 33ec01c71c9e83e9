//! Static file server that makes every response cross-origin isolated.
//!
//! Each response carries `Cross-Origin-Opener-Policy: same-origin` and
//! `Cross-Origin-Embedder-Policy: require-corp`, which browsers require
//! before enabling `SharedArrayBuffer` and friends.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::Config;
pub use error::{ServeError, StartupError};
pub use server::Server;
