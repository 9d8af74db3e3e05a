use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "tripdeck")]
#[command(about = "Plan trips and review routes and ELD logs from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the trip service (overrides TRIPDECK_API_URL and the
    /// config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the trip-planning form (default)")]
    Plan,

    #[command(about = "Browse your trips")]
    Trips {
        #[arg(
            long,
            default_value = "tui",
            help = "Output mode: tui (interactive), plain (table), or json"
        )]
        format: OutputFormat,
    },

    #[command(about = "Show one trip: summary, route map, and ELD logs")]
    Show {
        /// Trip identifier
        id: Uuid,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tui,
    Plain,
    Json,
}
