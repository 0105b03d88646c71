//! Common types shared across LinkScout crates.
//!
//! This crate defines the shared error type and the observability helpers
//! used by the other workspace members. It is intentionally lightweight so
//! that every crate can depend on it without heavy transitive costs.
//!
//! # Overview
//!
//! - [`LinkScoutError`] and [`Result`]: shared error handling
//! - [`observability`]: centralised tracing/logging initialisation

pub mod observability;

/// Error types used across the LinkScout system.
#[derive(thiserror::Error, Debug)]
pub enum LinkScoutError {
    /// Reading or writing a profile file failed.
    #[error("Profile I/O error: {0}")]
    ProfileIo(#[from] std::io::Error),

    /// CSV parsing or serialisation failed.
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Convenient alias for results that use [`LinkScoutError`].
pub type Result<T> = std::result::Result<T, LinkScoutError>;
