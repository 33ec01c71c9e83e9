use std::process::ExitCode;

use coi_serve::server::{shutdown_signal, Server};
use coi_serve::{logger, Config, StartupError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[FATAL] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StartupError> {
    // Optional single argument: a configuration file
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load_from(&path)?,
        None => Config::default(),
    };

    logger::init(&cfg).map_err(StartupError::Logger)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(StartupError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), StartupError> {
    let server = Server::bind(&cfg)?;
    let port = server
        .local_addr()
        .map_or(cfg.server.port, |addr| addr.port());

    println!("Serving at http://localhost:{port}");

    server.run_until(shutdown_signal()).await;
    Ok(())
}
