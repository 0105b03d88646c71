//! Batch partitioning and the per-batch session lifecycle.
//!
//! Each batch exclusively owns one remote session and one window; profiles
//! inside a batch are searched strictly sequentially because a window cannot
//! be queried concurrently with itself. Batches run concurrently against
//! independent sessions and are joined at the end, so one batch's failure
//! never touches its siblings.

use futures::future::join_all;
use linkscout_browser::RemoteBrowser;

use crate::profile::{EnrichedProfile, ProfileQuery};
use crate::search::search_profile;

/// Profiles processed per remote session. 1 means one session per profile.
pub const BATCH_SIZE: usize = 5;

/// Split `items` into contiguous groups of `size` (the last group may be
/// short). Concatenating the groups in order reproduces the input.
pub fn partition<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    assert!(size >= 1, "batch size must be at least 1");
    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut rest = items.into_iter();
    loop {
        let group: Vec<T> = rest.by_ref().take(size).collect();
        if group.is_empty() {
            return groups;
        }
        groups.push(group);
    }
}

/// Run one batch against its own freshly created session.
///
/// Setup failures are absorbed here: a batch that cannot get a session or a
/// window contributes zero results. The session is terminated on every exit
/// path where it was created — window-creation failure included — with
/// termination failures logged and swallowed.
pub async fn run_batch(
    browser: &dyn RemoteBrowser,
    index: usize,
    batch: Vec<ProfileQuery>,
) -> Vec<EnrichedProfile> {
    let session = match browser.create_session().await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(batch = index, error = %e, "batch.session.create_failed");
            return Vec::new();
        }
    };
    tracing::info!(batch = index, %session, size = batch.len(), "batch.start");

    let enriched = match browser.create_window(&session).await {
        Ok(window) => {
            let mut enriched = Vec::with_capacity(batch.len());
            for item in &batch {
                // Strictly sequential: the next search only starts once this
                // one has fully resolved against the shared window.
                if let Some(found) = search_profile(browser, &session, &window, item).await {
                    enriched.push(found);
                }
            }
            enriched
        }
        Err(e) => {
            tracing::warn!(batch = index, %session, error = %e, "batch.window.create_failed");
            Vec::new()
        }
    };

    if let Err(e) = browser.terminate_session(&session).await {
        tracing::warn!(batch = index, %session, error = %e, "batch.session.terminate_failed");
    }
    tracing::info!(batch = index, enriched = enriched.len(), "batch.done");
    enriched
}

/// Partition `profiles` and run all batches concurrently, concatenating the
/// results in batch order (intra-batch order preserved).
pub async fn enrich_all(
    browser: &dyn RemoteBrowser,
    profiles: Vec<ProfileQuery>,
    batch_size: usize,
) -> Vec<EnrichedProfile> {
    let batches = partition(profiles, batch_size);
    tracing::info!(batches = batches.len(), batch_size, "enrich.dispatch");

    let runs = batches
        .into_iter()
        .enumerate()
        .map(|(index, batch)| run_batch(browser, index, batch));
    join_all(runs).await.into_iter().flatten().collect()
}
