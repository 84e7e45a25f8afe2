//! Serve command - run the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use colored::Colorize;
use datalens::DatalensConfig;

use crate::server::{app, state::AppState};

pub fn run(
    dir: PathBuf,
    host: String,
    port: u16,
    cors_origin: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| format!("Invalid address {}:{}: {}", host, port, e))?;
    let cors = app::cors_layer(&cors_origin)
        .map_err(|e| format!("Invalid CORS origin '{}': {}", cors_origin, e))?;

    if !dir.is_dir() {
        eprintln!(
            "{} Dataset directory {} does not exist, no datasets will be listed",
            "Warning:".yellow(),
            dir.display()
        );
    }

    let state = AppState::new(DatalensConfig::with_dataset_dir(&dir));

    let url = format!("http://{}", addr);
    println!();
    println!(
        "{} {}",
        "Serving datasets at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Datasets: {}", dir.display());
    println!("  CORS origin: {}", cors_origin);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, addr, cors))
}
