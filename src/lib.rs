// * listing-flow: off-campus housing listing ingestion.
// * Takes semi-structured raw listing records scraped from the housing
// * portal and normalizes them into a clean, deterministic artifact for
// * downstream storage, search, and comparison.

pub mod config;
pub mod pipeline;
pub mod refinery;
pub mod schema;
pub mod source;
