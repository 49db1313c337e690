use anyhow::Result;
use clap::Parser;
use tracing::info;

use irsforms::catalog::legacy::DEFAULT_LEGACY_YEAR;
use irsforms::cli::{Cli, Commands};
use irsforms::config::Config;
use irsforms::downloader::{self, HttpFormSource};
use irsforms::listing::{self, HttpListingSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "irsforms=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "irsforms.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match &cli.command {
        Commands::Scrape => {
            info!("Scraping {} listing pages from {}", config.listing_pages, config.listing_url);

            let source = HttpListingSource::from_config(&config)?;
            listing::scrape_metadata(&source, config.listing_pages, &config.metadata_path()).await?;
        }

        Commands::Download { years } => {
            info!("Starting metadata-driven download (years: {:?})", years);

            let source = HttpFormSource::from_config(&config)?;
            downloader::download_from_metadata(source, &config, years).await?;
        }

        Commands::Legacy { year } => {
            let year = year.unwrap_or(DEFAULT_LEGACY_YEAR);
            info!("Starting legacy list download for tax year {}", year);

            let source = HttpFormSource::from_config(&config)?;
            downloader::download_legacy(source, &config, year).await?;
        }
    }

    Ok(())
}
