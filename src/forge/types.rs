use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
/// Request for one page of closed pull requests, optionally filtered to a
/// base branch.
pub struct PullPageRequest {
    pub base_branch: Option<String>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
/// Request for one page of issues attached to a milestone.
pub struct IssuePageRequest {
    pub milestone: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
/// Request to replace a release's description, keyed by its internal id.
pub struct UpdateReleaseRequest {
    pub id: u64,
    pub body: String,
}

#[derive(Debug, Clone)]
/// A closed pull request as returned by the forge. `merged_at` is absent
/// for pull requests closed without merging.
pub struct PullRecord {
    pub number: u64,
    pub title: String,
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
/// An issue attached to a milestone.
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
/// An open milestone, resolved by title to its number before use.
pub struct Milestone {
    pub number: u64,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
/// A published release. The id targets updates; the body may be absent for
/// releases created without a description.
pub struct Release {
    pub id: u64,
    pub body: Option<String>,
}
