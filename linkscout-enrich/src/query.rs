//! Search-URL construction.

use url::Url;

use crate::profile::{ProfileQuery, UserProfile};

const SEARCH_BASE: &str = "https://www.google.com/search";

/// Build the search-engine query URL for one profile.
///
/// Deterministic and infallible: the terms are percent-encoded by the `url`
/// crate, so arbitrary name/email content cannot break the URL.
pub fn build_search_url(profile: &UserProfile) -> String {
    let terms = format!(
        "{} {} {} linkedin",
        profile.first_name, profile.last_name, profile.email
    );
    Url::parse_with_params(SEARCH_BASE, &[("q", terms.as_str())])
        .expect("static search base is a valid URL")
        .into()
}

/// Pair a profile with its search URL.
pub fn attach_search_url(profile: UserProfile) -> ProfileQuery {
    let query = build_search_url(&profile);
    ProfileQuery { profile, query }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> UserProfile {
        UserProfile {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
        }
    }

    #[test]
    fn query_is_deterministic() {
        assert_eq!(build_search_url(&jane()), build_search_url(&jane()));
    }

    #[test]
    fn query_is_well_formed_and_contains_identity() {
        let raw = build_search_url(&jane());
        let url = Url::parse(&raw).expect("query URL parses");
        assert_eq!(url.domain(), Some("www.google.com"));

        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .expect("q param present");
        assert_eq!(q, "Jane Doe jane@example.com linkedin");
    }

    #[test]
    fn query_percent_encodes_terms() {
        let profile = UserProfile {
            first_name: "Ana María".into(),
            last_name: "O'Neil & Co".into(),
            email: "ana+test@example.com".into(),
        };
        let raw = build_search_url(&profile);
        assert!(!raw.contains(' '), "spaces must be encoded: {raw}");
        // The literal '&' inside the terms must not split the query string.
        let url = Url::parse(&raw).unwrap();
        assert_eq!(url.query_pairs().count(), 1);
        // Decoding through the url crate restores the original terms.
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(q, "Ana María O'Neil & Co ana+test@example.com linkedin");
    }
}
