//! Error types
//!
//! `ServeError` covers a single request and always ends up as an HTTP status.
//! `StartupError` is fatal: the process cannot serve anything.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while answering one request
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("File not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(io::Error),
}

impl ServeError {
    /// HTTP status code sent to the client
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::Internal(_) => 500,
        }
    }

    /// Short message placed in the error page
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "File not found",
            Self::Forbidden => "Permission denied",
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

impl From<io::Error> for ServeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Internal(err),
        }
    }
}

/// Fatal error raised before the accept loop starts
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("Root directory '{}' is not usable: {source}", path.display())]
    Root { path: PathBuf, source: io::Error },

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Failed to open log file: {0}")]
    Logger(io::Error),

    #[error("Failed to build runtime: {0}")]
    Runtime(io::Error),
}
