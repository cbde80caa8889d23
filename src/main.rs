use anyhow::Result;
use chrono::Local;

use shopee_brands_etl::categories::CATEGORIES;
use shopee_brands_etl::config::Settings;
use shopee_brands_etl::extractors::BrandExtractor;
use shopee_brands_etl::services::run_pipeline;
use shopee_brands_etl::storage::{output_filename, CsvWriter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::new()?;

    let started_at = Local::now();
    println!(
        "Starting brand extraction at: {}",
        started_at.format("%Y-%m-%d %H:%M:%S")
    );

    let start_time = std::time::Instant::now();
    let extractor = BrandExtractor::new(&settings)?;
    let records = run_pipeline(&extractor, CATEGORIES).await;

    let filename = output_filename(Local::now().date_naive());
    let writer = CsvWriter::new(&settings.output_dir)?;
    let path = writer.write(&filename, &records)?;

    println!("\nExtraction Summary:");
    println!("Categories Processed: {}", CATEGORIES.len());
    println!("Total Brand Records: {}", records.len());
    println!("Total Time: {:.1} seconds", start_time.elapsed().as_secs_f64());
    println!("Output File: {}", path.display());

    Ok(())
}
