use anyhow::Result;
use tripdeck_client::{TripClient, resolve_api_url};

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let api_url = resolve_api_url(cli.api_url.as_deref());
    log::debug!("using trip service at {}", api_url);

    let client = TripClient::new(api_url);
    let rt = tokio::runtime::Runtime::new()?;

    match cli.command.unwrap_or(Commands::Plan) {
        Commands::Plan => handlers::plan::handle(client, &rt),
        Commands::Trips { format } => handlers::trips::handle(client, &rt, format),
        Commands::Show { id } => handlers::show::handle(client, &rt, id),
    }
}
