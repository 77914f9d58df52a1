//! faretrack - airfare deal tracker.
//!
//! Periodically checks fares between two airports for given travel dates and
//! alerts (console, optionally SMS) when the cheapest total meets the
//! configured deal price.

mod tracker;

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use faretrack_alerts::SmsSink;
use faretrack_core::{EnvSnapshot, RawSearchOptions, RequirementMode, SearchConfig};
use faretrack_fares::RestFareClient;
use tracker::Tracker;

/// Fare tracker CLI
#[derive(Parser, Debug)]
#[command(name = "faretrack")]
#[command(about = "Tracks airfare prices and alerts when a deal shows up", long_about = None)]
struct Args {
    /// Origin airport code
    #[arg(long = "from")]
    from: Option<String>,

    /// Destination airport code
    #[arg(long = "to")]
    to: Option<String>,

    /// Departure date in YYYY-MM-DD
    #[arg(long)]
    departure: Option<String>,

    /// Return date in YYYY-MM-DD (leave out if one-way)
    #[arg(long = "return")]
    return_date: Option<String>,

    /// Desired total price in Mexican pesos
    #[arg(long = "deal-price")]
    deal_price: Option<String>,

    /// Number of minutes until the next run (30 by default)
    #[arg(long)]
    interval: Option<String>,

    /// Require a valid deal price (also requires FARETRACK_USER_AGENT)
    #[arg(long, default_value_t = false)]
    require_deal_price: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl From<&Args> for RawSearchOptions {
    fn from(args: &Args) -> Self {
        Self {
            origin: args.from.clone(),
            destination: args.to.clone(),
            departure_date: args.departure.clone(),
            return_date: args.return_date.clone(),
            deal_price: args.deal_price.clone(),
            poll_interval: args.interval.clone(),
        }
    }
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(&args.log_level);

    let mode = if args.require_deal_price {
        RequirementMode::DealPriceRequired
    } else {
        RequirementMode::DealPriceOptional
    };

    let env = EnvSnapshot::capture();
    let raw = RawSearchOptions::from(&args);

    let config = match SearchConfig::validate(&raw, &env, mode) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    info!(
        origin = %config.origin_airport,
        destination = %config.destination_airport,
        departure = %config.departure_date,
        deal_price = config.deal_price,
        interval_minutes = config.poll_interval_minutes,
        "Starting fare tracker"
    );

    let source = match RestFareClient::new(config.user_agent.as_deref()) {
        Ok(client) => client,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let sink = match SmsSink::new() {
        Ok(sink) => sink,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let result = Tracker::new(config, Box::new(source), Arc::new(sink))
        .run()
        .await;

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}
