use std::path::Path;
use std::process::ExitCode;

use listing_flow::config::constants::{DEFAULT_ARTIFACT_PATH, LISTING_INDEX_URL};
use listing_flow::pipeline::{write_artifact, IngestionPipeline};
use listing_flow::schema::RawRecord;
use listing_flow::source::{FileSource, HttpSource, SourceError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("listing_flow=debug,info")
        .with_target(false)
        .json()
        .init();

    // * Usage: listing-flow [input] [output]
    // * input: raw-record JSON endpoint (http/https) or dump file path
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| LISTING_INDEX_URL.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.to_string());

    match run(&input, Path::new(&output)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // * Acquisition or emission failure: abort without emitting a
            // * partial artifact
            tracing::error!(error = %e, "Ingestion run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(input: &str, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let records = acquire(input).await?;

    let pipeline = IngestionPipeline::new();
    let report = pipeline.run(&records);
    write_artifact(output, &report.accepted)?;

    let summary = &report.summary;
    tracing::info!(
        processed = summary.total_processed,
        accepted = summary.total_accepted,
        rejected = summary.total_rejected,
        with_prices = summary.with_prices,
        neighborhoods = %summary.neighborhoods.join(", "),
        categories = %summary.categories.join(", "),
        "Run summary"
    );
    if let (Some(min), Some(max)) = (summary.price_min, summary.price_max) {
        tracing::info!(price_min = min, price_max = max, "Aggregate price range");
    }

    // * Short sample of what was accepted, for eyeballing a run
    for (idx, listing) in report.accepted.iter().take(10).enumerate() {
        tracing::info!(
            "{}. {} ({}) - {}",
            idx + 1,
            listing.name,
            listing.neighborhood.as_str(),
            listing.price_label()
        );
    }

    Ok(())
}

async fn acquire(input: &str) -> Result<Vec<RawRecord>, SourceError> {
    if input.starts_with("http://") || input.starts_with("https://") {
        HttpSource::new(input)?.fetch().await
    } else {
        FileSource::new(input).fetch().await
    }
}
