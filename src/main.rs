// src/main.rs
use clap::Parser;
use ogn_directory::directory::client::{DEFAULT_BASE_URL, LISTING_PATH};
use ogn_directory::directory::models::CompanyRecord;
use ogn_directory::directory::{ClientConfig, DirectoryClient};
use ogn_directory::utils::{self, AppError};
use std::time::Duration;

const DEFAULT_CATEGORY_PATH: &str = "/Directory/AIPO/Air_Pollution_Control_";

/// Command Line Interface for the OGN company directory scraper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the directory site
    #[arg(long, env = "OGN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Category page path to scrape
    #[arg(short, long, env = "OGN_CATEGORY", default_value = DEFAULT_CATEGORY_PATH)]
    category: String,

    /// Only list category names and links
    #[arg(short, long)]
    list_categories: bool,

    /// Scrape every category found on the listing page
    #[arg(short, long, conflicts_with = "list_categories")]
    all: bool,

    /// Print the scraped records as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting with args: {:?}", args);

    if args.timeout_secs == 0 {
        return Err(AppError::Config("--timeout-secs must be greater than zero".to_string()));
    }

    // 3. Build the HTTP client
    let config = ClientConfig {
        base_url: args.base_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    };
    let client = DirectoryClient::new(&config)?;

    // 4. Listing only
    if args.list_categories {
        tracing::info!("Listing categories from {}{}", client.base_url(), LISTING_PATH);
        let categories = client.list_categories().await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        } else {
            for category in &categories {
                println!("{}\t{}", category.name, category.link);
            }
        }
        return Ok(());
    }

    // 5. Scrape one category, or all of them
    let companies = if args.all {
        scrape_all_categories(&client).await?
    } else {
        client.extract_companies(&args.category).await?
    };

    tracing::info!("Scraped {} companies", companies.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&companies)?);
    }

    Ok(())
}

/// Walks every category on the listing page. A failing category is logged
/// and skipped; the run only fails when no category succeeded.
async fn scrape_all_categories(client: &DirectoryClient) -> Result<Vec<CompanyRecord>, AppError> {
    let categories = client.list_categories().await?;
    tracing::info!("Found {} categories to scrape", categories.len());

    let mut companies = Vec::new();
    let mut success_count = 0;
    let mut failure_count = 0;

    for category in &categories {
        tracing::info!("Processing category: {} ({})", category.name, category.link);

        match client.extract_companies(&category.link).await {
            Ok(found) => {
                tracing::info!("Category '{}' yielded {} companies", category.name, found.len());
                success_count += 1;
                companies.extend(found);
            }
            Err(e) => {
                tracing::error!("Failed to scrape category '{}': {}", category.name, e);
                failure_count += 1;
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to scrape any of {} categories",
            failure_count
        )));
    }

    Ok(companies)
}
