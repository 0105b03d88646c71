//! Per-profile search and extraction classification.
//!
//! One search drives the shared remote window: load the query URL, then ask
//! the hosted model for the matching LinkedIn profile URL. The model's reply
//! is free text; [`Extraction`] classifies it exactly once, at this boundary,
//! so downstream code never has to re-interpret raw strings.

use std::sync::OnceLock;

use linkscout_browser::{RemoteBrowser, SessionId, WindowId};
use regex::Regex;

use crate::profile::{EnrichedProfile, ProfileQuery};

/// Fixed prompt issued against each rendered search-results page.
///
/// The model is told to answer with the bare URL, accepting country
/// subdomains (`xx.linkedin.com/in/...`), and with the literal string
/// `Error` when no profile link is visible.
pub const EXTRACTION_PROMPT: &str = "\
This browser is open to a web search results page. Find the URL of the \
LinkedIn profile page for the person being searched for and respond with \
only that URL, nothing else. Accept LinkedIn country subdomains such as \
uk.linkedin.com/in/... as valid profile URLs. Do not return links to \
LinkedIn posts (URLs containing /posts/). If you cannot find a LinkedIn \
profile URL on the page, respond with the single word Error.";

/// Classified outcome of one page-extraction reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The reply contained a LinkedIn profile URL.
    Found(String),
    /// The model's explicit no-match sentinel (or an empty reply).
    NotFound,
    /// Free text that was neither the sentinel nor a profile URL.
    Malformed(String),
}

fn profile_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Country subdomains (uk., fr., ...) and www. are both accepted.
        Regex::new(r"(?i)\b(?:[a-z][a-z0-9-]*\.)?linkedin\.com/in/[A-Za-z0-9%_./-]+")
            .expect("profile url pattern")
    })
}

impl Extraction {
    /// Classify the raw model reply.
    pub fn classify(raw: &str) -> Extraction {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("error") {
            return Extraction::NotFound;
        }

        let Some(m) = profile_url_re().find(trimmed) else {
            return Extraction::Malformed(trimmed.to_string());
        };
        // Models occasionally wrap the URL in prose or trailing punctuation.
        let url = m.as_str().trim_end_matches(['.', ',', ')', ']']);
        if url.contains("/posts/") {
            return Extraction::Malformed(trimmed.to_string());
        }

        // The match starts at the host, so any scheme the model included
        // sits just before it; otherwise default to https.
        let start = m.start();
        if trimmed[..start].ends_with("://") {
            let scheme_start = trimmed[..start]
                .rfind(char::is_whitespace)
                .map_or(0, |i| i + 1);
            Extraction::Found(format!("{}{}", &trimmed[scheme_start..start], url))
        } else {
            Extraction::Found(format!("https://{url}"))
        }
    }
}

/// Run one profile's search against an already-open session window.
///
/// Service failures during load or query are logged and reported as `None`;
/// the caller drops the profile and moves on. `NotFound` and `Malformed`
/// extractions are likewise excluded from the enriched set.
pub async fn search_profile(
    browser: &dyn RemoteBrowser,
    session: &SessionId,
    window: &WindowId,
    item: &ProfileQuery,
) -> Option<EnrichedProfile> {
    tracing::info!(email = %item.profile.email, "profile.search.start");

    let reply = async {
        browser.load_url(session, window, &item.query).await?;
        browser.page_query(session, window, EXTRACTION_PROMPT).await
    }
    .await;

    let raw = match reply {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(email = %item.profile.email, error = %e, "profile.search.failed");
            return None;
        }
    };

    match Extraction::classify(&raw) {
        Extraction::Found(linkedin_url) => {
            tracing::info!(email = %item.profile.email, url = %linkedin_url, "profile.search.found");
            Some(EnrichedProfile {
                profile: item.profile.clone(),
                query: item.query.clone(),
                linkedin_url,
            })
        }
        Extraction::NotFound => {
            tracing::info!(email = %item.profile.email, "profile.search.not_found");
            None
        }
        Extraction::Malformed(text) => {
            let snippet: String = text.chars().take(120).collect();
            tracing::warn!(email = %item.profile.email, reply = %snippet, "profile.search.malformed_reply");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_plain_profile_url() {
        assert_eq!(
            Extraction::classify("https://www.linkedin.com/in/jane-doe"),
            Extraction::Found("https://www.linkedin.com/in/jane-doe".into())
        );
    }

    #[test]
    fn classifies_country_subdomain() {
        assert_eq!(
            Extraction::classify("https://uk.linkedin.com/in/john-roe-123"),
            Extraction::Found("https://uk.linkedin.com/in/john-roe-123".into())
        );
    }

    #[test]
    fn adds_scheme_when_missing() {
        assert_eq!(
            Extraction::classify("www.linkedin.com/in/jane-doe"),
            Extraction::Found("https://www.linkedin.com/in/jane-doe".into())
        );
    }

    #[test]
    fn strips_surrounding_prose_and_punctuation() {
        assert_eq!(
            Extraction::classify("The profile is https://www.linkedin.com/in/jane-doe."),
            Extraction::Found("https://www.linkedin.com/in/jane-doe".into())
        );
    }

    #[test]
    fn error_sentinel_is_not_found() {
        assert_eq!(Extraction::classify("Error"), Extraction::NotFound);
        assert_eq!(Extraction::classify("  error \n"), Extraction::NotFound);
        assert_eq!(Extraction::classify(""), Extraction::NotFound);
    }

    #[test]
    fn posts_links_are_rejected() {
        assert_eq!(
            Extraction::classify("https://www.linkedin.com/in/jane-doe/posts/some-post"),
            Extraction::Malformed(
                "https://www.linkedin.com/in/jane-doe/posts/some-post".into()
            )
        );
    }

    #[test]
    fn unrelated_text_is_malformed() {
        assert_eq!(
            Extraction::classify("I could not access the page"),
            Extraction::Malformed("I could not access the page".into())
        );
    }
}
