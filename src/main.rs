use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabecrawl::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "tabecrawl",
    version,
    about = "Tabelog restaurant listing crawler with CSV export",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the restaurant listing and export a CSV dataset
    Crawl {
        /// Base listing URL, sort/filter query parameters included
        #[arg(short, long)]
        url: Option<String>,

        /// User agent string sent with every request
        #[arg(long)]
        user_agent: Option<String>,

        /// First listing page to visit
        #[arg(long)]
        start_page: Option<u32>,

        /// Upper bound on listing pages visited
        #[arg(long)]
        max_page: Option<u32>,

        /// Cap per-page extraction and stop after one listing page
        #[arg(long, default_value = "false")]
        test_mode: bool,

        /// Output directory
        #[arg(short, long)]
        output: Option<String>,

        /// Output file name pattern; {now} expands to a timestamp
        #[arg(long)]
        file_pattern: Option<String>,

        /// Configuration file (TOML); environment variables otherwise
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    tracing::info!("tabecrawl starting");

    match cli.command {
        Commands::Crawl {
            url,
            user_agent,
            start_page,
            max_page,
            test_mode,
            output,
            file_pattern,
            config,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)?,
                None => Config::from_env()?,
            };

            // CLI flags override config values.
            if let Some(url) = url {
                config.crawl.base_url = url;
            }
            if let Some(user_agent) = user_agent {
                config.crawler.user_agent = user_agent;
            }
            if let Some(start_page) = start_page {
                config.crawl.start_page = start_page;
            }
            if let Some(max_page) = max_page {
                config.crawl.max_page = max_page;
            }
            if test_mode {
                config.crawl.test_mode = true;
            }
            if let Some(output) = output {
                config.output.dir = output;
            }
            if let Some(file_pattern) = file_pattern {
                config.output.file_pattern = file_pattern;
            }

            commands::crawl(config).await?;
        }
    }

    tracing::info!("tabecrawl completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("tabecrawl=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("tabecrawl=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
