//! Datalens CLI - dataset analysis suggestions and chart data.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origin,
        } => commands::serve::run(cli.dir, host, port, cors_origin),

        Commands::List { json } => commands::list::run(cli.dir, json),

        Commands::Suggest { dataset, json } => commands::suggest::run(cli.dir, dataset, json),

        Commands::Analyze {
            dataset,
            analysis_type,
            column,
            group_by,
            json,
        } => commands::analyze::run(cli.dir, dataset, analysis_type, column, group_by, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "datalens=debug,tower_http=debug"
    } else {
        "datalens=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
