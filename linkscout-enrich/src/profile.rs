//! Record shapes flowing through the enrichment pipeline.
//!
//! Each shape is derived from the previous one and never mutated afterwards:
//! `UserProfile` (as loaded) → `ProfileQuery` (plus search URL) →
//! `EnrichedProfile` (plus extracted LinkedIn URL, the terminal shape).

use serde::{Deserialize, Serialize};

/// One identity record as read from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A profile with its fully formed search-engine query URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileQuery {
    pub profile: UserProfile,
    /// Rendered `https://www.google.com/search?q=...` URL.
    pub query: String,
}

/// A profile whose search resolved to a LinkedIn profile URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProfile {
    pub profile: UserProfile,
    pub query: String,
    pub linkedin_url: String,
}
