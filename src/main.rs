use crate::analysis::{filter_route, min_flight_minutes, price_summary};
use crate::error::AnalysisError;
use crate::report::Lang;
use crate::ticket::TicketRequest;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod analysis;
mod error;
mod report;
mod ticket;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON tickets file
    #[arg(short, long, value_name = "FILE", default_value = "data/tickets.json")]
    tickets: PathBuf,

    /// Origin airport code
    #[arg(short, long, default_value = "VVO")]
    origin: String,

    /// Destination airport code
    #[arg(short, long, default_value = "TLV")]
    destination: String,

    /// Language of the report labels
    #[arg(short, long, value_enum, default_value_t = Lang::Ru)]
    lang: Lang,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args).inspect_err(|e| error!("{e}"))?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AnalysisError> {
    info!(file = %args.tickets.display(), "loading tickets");
    let request = TicketRequest::load_from_file(&args.tickets)?;

    let route = filter_route(&request.tickets, &args.origin, &args.destination);
    info!(
        origin = %args.origin,
        destination = %args.destination,
        matched = route.len(),
        total = request.tickets.len(),
        "filtered tickets"
    );

    let shortest = min_flight_minutes(route.iter().copied())?;
    let prices = price_summary(route.iter().copied());

    let labels = args.lang.labels();
    println!("{}", report::render_durations(&shortest, labels));
    println!("{}", report::render_prices(prices.as_ref(), labels));
    Ok(())
}
