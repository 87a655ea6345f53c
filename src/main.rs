mod ticker;
mod trendradar;

pub const USER_AGENT: &str = concat!("newsflow/", env!("CARGO_PKG_VERSION"));

use clap::{Parser, Subcommand};
use tracing::info;
use trendradar::NewsClient;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search news for a ticker or keyword
    Search {
        /// Ticker symbol or keyword (".TW"/".TWO" suffixes are stripped)
        ticker: String,
        /// Only include news on or after this date (e.g. 2026-01-31)
        #[arg(long)]
        start_date: Option<String>,
        /// Only include news on or before this date
        #[arg(long)]
        end_date: Option<String>,
        /// Maximum number of items
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fetch the latest hot news across all topics
    Latest {
        /// Maximum number of items
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("newsflow=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let client = NewsClient::from_env(reqwest::Client::new());
    info!(base_url = %client.base_url(), "querying TrendRadar");

    let output = match cli.command {
        Command::Search {
            ticker,
            start_date,
            end_date,
            limit,
        } => {
            client
                .search_news(&ticker, start_date.as_deref(), end_date.as_deref(), limit)
                .await
        }
        Command::Latest { limit } => client.latest_news(limit).await,
    };

    println!("{output}");
    Ok(())
}
