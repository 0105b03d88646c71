//! CSV loading and writing for profile records.
//!
//! Input columns are positional `email,first_name,last_name` with a header
//! row; output carries a `email,firstName,lastName,linkedInProfile` header.
//! The `csv` crate quotes fields on write, so names containing commas or
//! newlines round-trip intact.

use std::path::Path;

use linkscout_common::{LinkScoutError, Result};

use crate::profile::{EnrichedProfile, UserProfile};

/// Header written to the output file.
pub const OUTPUT_HEADER: [&str; 4] = ["email", "firstName", "lastName", "linkedInProfile"];

/// Read profiles from `path`.
///
/// The header row is consumed and ignored; surrounding whitespace is trimmed
/// from every field. Rows with fewer than three columns are kept with the
/// missing fields empty rather than rejected — upstream exports are sloppy
/// and a half-filled profile can still produce a usable search.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<UserProfile>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(|e| LinkScoutError::Csv(e.to_string()))?;

    let mut profiles = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LinkScoutError::Csv(e.to_string()))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        profiles.push(UserProfile {
            email: record.get(0).unwrap_or_default().to_string(),
            first_name: record.get(1).unwrap_or_default().to_string(),
            last_name: record.get(2).unwrap_or_default().to_string(),
        });
    }
    Ok(profiles)
}

/// Write enriched profiles to `path`, truncating any previous run's output.
pub fn write_enriched<P: AsRef<Path>>(path: P, rows: &[EnrichedProfile]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path.as_ref()).map_err(|e| LinkScoutError::Csv(e.to_string()))?;

    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| LinkScoutError::Csv(e.to_string()))?;
    for row in rows {
        writer
            .write_record([
                row.profile.email.as_str(),
                row.profile.first_name.as_str(),
                row.profile.last_name.as_str(),
                row.linkedin_url.as_str(),
            ])
            .map_err(|e| LinkScoutError::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
