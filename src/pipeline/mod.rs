// * Batch orchestration.
// * Drives the end-to-end run: transform every raw record, enforce the
// * output validity invariant, and report what happened. A single bad
// * record never aborts the batch — the transforms are total — so the only
// * fatal conditions live at the acquisition and emission boundaries.

pub mod artifact;

// * Re-exports for convenient access
pub use artifact::{write_artifact, ArtifactError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::refinery::{ListingTransformer, TransformerConfig};
use crate::schema::{Listing, RawRecord};

/// Aggregate statistics for one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_processed: usize,
    pub total_accepted: usize,
    pub total_rejected: usize,
    /// Accepted listings with at least one resolved price.
    pub with_prices: usize,
    /// Distinct neighborhood labels seen, in first-seen order.
    pub neighborhoods: Vec<String>,
    /// Distinct categories seen, in first-seen order.
    pub categories: Vec<String>,
    /// Lowest positive resolved minimum across priced listings.
    pub price_min: Option<f64>,
    /// Highest resolved maximum across priced listings.
    pub price_max: Option<f64>,
}

/// Everything a run produced: the accepted listings, the rejection count,
/// and the summary.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub accepted: Vec<Listing>,
    pub rejected: usize,
    pub summary: RunSummary,
}

/// Transforms, validates, and summarizes a batch of raw records.
pub struct IngestionPipeline {
    transformer: ListingTransformer,
}

impl IngestionPipeline {
    /// Creates a pipeline with the portal defaults.
    pub fn new() -> Self {
        Self {
            transformer: ListingTransformer::new(),
        }
    }

    /// Creates a pipeline with a custom transformer configuration.
    pub fn with_config(config: TransformerConfig) -> Self {
        Self {
            transformer: ListingTransformer::with_config(config),
        }
    }

    /// Runs the batch. Every record is transformed (no short-circuit);
    /// records violating the output invariant — missing name or zero
    /// coordinates — are counted and dropped, not treated as a run failure.
    pub fn run(&self, records: &[RawRecord]) -> PipelineReport {
        info!(count = records.len(), "Transforming raw records");

        let mut accepted: Vec<Listing> = Vec::with_capacity(records.len());
        let mut rejected = 0usize;

        for raw in records {
            let listing = self.transformer.transform(raw);
            if listing.is_valid() {
                accepted.push(listing);
            } else {
                debug!(
                    id = listing.id,
                    name = %listing.name,
                    "Rejected listing: missing name or unmappable coordinates"
                );
                rejected += 1;
            }
        }

        let summary = Self::summarize(records.len(), &accepted, rejected);
        info!(
            accepted = summary.total_accepted,
            rejected = summary.total_rejected,
            "Ingestion run complete"
        );

        PipelineReport {
            accepted,
            rejected,
            summary,
        }
    }

    fn summarize(total: usize, accepted: &[Listing], rejected: usize) -> RunSummary {
        let mut neighborhoods: Vec<String> = Vec::new();
        let mut categories: Vec<String> = Vec::new();
        for listing in accepted {
            let label = listing.neighborhood.as_str().to_string();
            if !neighborhoods.contains(&label) {
                neighborhoods.push(label);
            }
            if !categories.contains(&listing.category) {
                categories.push(listing.category.clone());
            }
        }

        let priced: Vec<&Listing> = accepted.iter().filter(|l| l.has_price()).collect();
        let price_min = priced
            .iter()
            .filter_map(|l| l.price_min)
            .filter(|p| *p > 0.0)
            .reduce(f64::min);
        // * Range max spans the priced listings only; an unset max counts
        // * as zero there, same as the historical export
        let price_max = if price_min.is_some() {
            priced
                .iter()
                .map(|l| l.price_max.unwrap_or(0.0))
                .reduce(f64::max)
        } else {
            None
        };

        RunSummary {
            total_processed: total,
            total_accepted: accepted.len(),
            total_rejected: rejected,
            with_prices: priced.len(),
            neighborhoods,
            categories,
            price_min,
            price_max,
        }
    }
}

impl Default for IngestionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
