// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

use crate::error::StartupError;

impl Config {
    /// Load configuration from the specified file, falling back to defaults
    /// for every key the file does not set.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path))
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.root", defaults.server.root)?
            .set_default("logging.access_log", defaults.logging.access_log)?
            .set_default("logging.access_log_format", defaults.logging.access_log_format)?
            .set_default(
                "performance.connection_timeout",
                i64::try_from(defaults.performance.connection_timeout).unwrap_or(i64::MAX),
            )?
            .set_default("performance.keep_alive", defaults.performance.keep_alive)?
            .set_default("http.server_name", defaults.http.server_name)?
            .set_default("http.index_files", defaults.http.index_files)?
            .build()?;

        settings.try_deserialize()
    }

    /// Listen address; `host` is a bare IPv4 or IPv6 address
    pub fn get_socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let host = self.server.host.trim_start_matches('[').trim_end_matches(']');
        let ip: IpAddr = host
            .parse()
            .map_err(|_| StartupError::InvalidAddress(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
