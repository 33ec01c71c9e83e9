// Server module entry point
// Listener creation, the accept loop and per-connection tasks

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module gets another name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::Server;
pub use signal::shutdown_signal;
