//! Collects pull requests merged within a recency window.
use chrono::{Duration, Utc};
use log::*;

use crate::{
    collector::{
        Entry,
        pager::{self, Step},
    },
    forge::{traits::Forge, types::PullPageRequest},
    result::Result,
};

/// Collect one line per pull request merged within the last `hours` hours.
///
/// Walks closed pull requests newest-updated-first. Records closed without
/// merging are skipped and never end the walk; the first *merged* record at
/// or beyond the window stops the entire collection, since everything after
/// it is older.
pub async fn collect(
    forge: &dyn Forge,
    base_branch: Option<String>,
    hours: f64,
) -> Result<String> {
    let now = Utc::now();
    let max_age = Duration::milliseconds((hours * 3_600_000.0) as i64);
    let mut notes = String::new();

    pager::walk_pages(
        |page| {
            forge.list_closed_pull_requests(PullPageRequest {
                base_branch: base_branch.clone(),
                page,
            })
        },
        |pr| match pr.merged_at {
            // closed without merging
            None => Step::Continue,
            Some(merged_at) if now - merged_at < max_age => {
                let entry = Entry {
                    number: pr.number,
                    title: pr.title,
                };
                notes.push_str(&entry.line());
                Step::Continue
            }
            Some(merged_at) => {
                debug!(
                    "pull request #{} merged at {merged_at} is outside the window: stopping",
                    pr.number
                );
                Step::Stop
            }
        },
    )
    .await?;

    Ok(notes)
}
