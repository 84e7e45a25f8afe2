//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use datalens::{AnalysisType, DEFAULT_DATASET_DIR};
use std::path::PathBuf;

/// Datalens: analysis suggestions and charts for CSV datasets
#[derive(Parser)]
#[command(name = "datalens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding one CSV file per dataset
    #[arg(
        short,
        long,
        global = true,
        env = "DATALENS_DATASET_DIR",
        default_value = DEFAULT_DATASET_DIR
    )]
    pub dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1", env = "DATALENS_HOST")]
        host: String,

        /// Port for web server
        #[arg(short, long, default_value = "8000", env = "DATALENS_PORT")]
        port: u16,

        /// Allowed CORS origin ("*" allows any origin)
        #[arg(long, default_value = "*", env = "DATALENS_CORS_ORIGIN")]
        cors_origin: String,
    },

    /// List available datasets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the analyses suggested for a dataset
    Suggest {
        /// Dataset id (file name without .csv)
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an analysis on a dataset
    Analyze {
        /// Dataset id (file name without .csv)
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Analysis type (group_sum, group_avg, value_counts, resample_month, resample_quarter)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        analysis_type: AnalysisType,

        /// Target column
        #[arg(short, long)]
        column: String,

        /// Grouping column (required for group_sum and group_avg)
        #[arg(short, long)]
        group_by: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
