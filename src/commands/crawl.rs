use anyhow::{Context, Result};

use tabecrawl::config::Config;
use tabecrawl::crawler::{DetailCrawler, ListingCrawler, PaceLimiter, TabelogFetcher};
use tabecrawl::models::SequenceCounter;
use tabecrawl::output::CsvWriter;

pub async fn crawl(config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    println!("Starting Tabelog Crawl");
    println!("======================");
    println!("  Listing URL: {}", config.crawl.base_url);
    println!(
        "  Pages: {}..={}{}",
        config.crawl.start_page,
        config.crawl.max_page,
        if config.crawl.test_mode { " (test mode)" } else { "" }
    );

    let fetcher = TabelogFetcher::new(&config.crawler).context("Failed to create fetcher")?;
    let pace = PaceLimiter::new();

    // Phase 1: walk the listing pages and collect candidates.
    let listing = ListingCrawler::new(&fetcher, &pace, config.crawl.clone())?;
    let mut seq = SequenceCounter::new();
    let candidates = listing.collect_candidates(&mut seq).await;

    println!("Found {} restaurants in total", candidates.len());

    // Phase 2: fetch every detail page, one record per candidate.
    let detail = DetailCrawler::new(&fetcher, &pace);
    let records = detail.harvest(&candidates).await;

    // Phase 3: write the full batch once.
    let writer = CsvWriter::new(std::path::Path::new(&config.output.dir))?;
    let path = writer.write(&records, &config.output.file_pattern)?;

    let failed = records.iter().filter(|r| r.error.is_some()).count();

    println!("\nCrawl Summary");
    println!("=============");
    println!("Total processed: {}", records.len());
    println!("Successful: {}", records.len() - failed);
    println!("Failed: {failed}");
    println!("Output file: {}", path.display());

    Ok(())
}
