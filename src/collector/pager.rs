//! Shared pagination protocol for walking a paginated remote source.
use std::future::Future;

use crate::result::Result;

/// Outcome of handling one record within a page walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Keep consuming records and pages.
    Continue,
    /// Stop the entire walk. No further pages are requested.
    Stop,
}

/// Walk numbered pages starting at 1, invoking `handle` for every record in
/// page order. The walk ends when a fetched page is empty or when `handle`
/// signals [`Step::Stop`]; once stopped, no further pages are fetched.
/// Fetch errors propagate to the caller; there are no retries.
pub async fn walk_pages<R, F, Fut, H>(
    mut fetch: F,
    mut handle: H,
) -> Result<()>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
    H: FnMut(R) -> Step,
{
    let mut page = 1u32;

    loop {
        let records = fetch(page).await?;

        if records.is_empty() {
            return Ok(());
        }

        for record in records {
            if let Step::Stop = handle(record) {
                return Ok(());
            }
        }

        page += 1;
    }
}
