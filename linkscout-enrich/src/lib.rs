//! Profile enrichment pipeline.
//!
//! Takes a CSV of user profiles (name, email), derives one web-search URL per
//! profile, drives a remote browser session per batch to load each search and
//! extract a LinkedIn profile URL via the service's hosted model, and writes
//! the successfully enriched profiles back out as CSV.
//!
//! - `profile`: the record shapes flowing through the pipeline
//! - `csvio`: CSV loading and writing
//! - `query`: search-URL construction
//! - `search`: per-profile search + extraction classification
//! - `batch`: partitioning, per-batch session lifecycle, parallel join

pub mod batch;
pub mod csvio;
pub mod profile;
pub mod query;
pub mod search;

pub use profile::{EnrichedProfile, ProfileQuery, UserProfile};
