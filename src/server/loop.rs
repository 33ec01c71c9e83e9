// Server loop module
// The `Server` object and its accept loop

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::listener::create_listener;
use crate::config::{AppState, Config};
use crate::error::StartupError;
use crate::logger;

/// A bound static file server
///
/// Binding and serving are separate steps: `bind` reports fatal startup
/// errors, `run`/`run_until` only return once the loop stops.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
}

impl Server {
    /// Resolve the root directory and bind the listening socket.
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(config: &Config) -> Result<Self, StartupError> {
        let state = Arc::new(AppState::new(config)?);
        let addr = config.get_socket_addr()?;
        let listener = create_listener(addr)?;

        Ok(Self {
            listener,
            state,
            active_connections: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Address actually bound (useful with port 0)
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until the process is terminated
    pub async fn run(self) {
        self.run_until(std::future::pending()).await;
    }

    /// Serve until `shutdown` completes.
    ///
    /// Stops accepting new connections; connections already accepted keep
    /// running on their own tasks.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        if let Ok(addr) = self.listener.local_addr() {
            logger::log_server_start(&addr, &self.state.root, &self.state.config);
        }

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => {
                            accept_connection(
                                stream,
                                peer_addr,
                                &self.state,
                                &self.active_connections,
                            );
                        }
                        Err(e) => {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }

                () = &mut shutdown => {
                    break;
                }
            }
        }
    }
}
