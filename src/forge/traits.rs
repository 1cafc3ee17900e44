//! Traits related to the remote git forge
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::types::{
        IssuePageRequest, IssueRecord, Milestone, PullPageRequest,
        PullRecord, Release, UpdateReleaseRequest,
    },
    result::Result,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    /// One page of closed pull requests sorted by update time, descending.
    async fn list_closed_pull_requests(
        &self,
        req: PullPageRequest,
    ) -> Result<Vec<PullRecord>>;

    /// All open milestones for the repository.
    async fn list_open_milestones(&self) -> Result<Vec<Milestone>>;

    /// One page of issues attached to a milestone, any state, sorted by
    /// update time, descending.
    async fn list_milestone_issues(
        &self,
        req: IssuePageRequest,
    ) -> Result<Vec<IssueRecord>>;

    /// Look up a release by its git tag.
    async fn get_release_by_tag(&self, tag: &str) -> Result<Release>;

    /// Replace the description of an existing release.
    async fn update_release_body(
        &self,
        req: UpdateReleaseRequest,
    ) -> Result<()>;
}
