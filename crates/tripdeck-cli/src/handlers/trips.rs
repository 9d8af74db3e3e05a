use std::io;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tokio::runtime::Runtime;
use tripdeck_client::TripClient;

use crate::app::{self, Route};
use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::views::TripListView;

pub fn handle(client: TripClient, rt: &Runtime, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tui => app::run(client, rt.handle().clone(), Route::Trips),
        OutputFormat::Plain | OutputFormat::Json => {
            let trips = rt.block_on(client.list_trips())?;
            let view_model = presenters::present_trip_list(trips);

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&view_model)?);
                return Ok(());
            }

            if io::stdout().is_terminal() {
                println!("{}", "Your Trips".bold());
            } else {
                println!("Your Trips");
            }
            print!("{}", TripListView::new(&view_model));
            Ok(())
        }
    }
}
