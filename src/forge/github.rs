//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, params};
use serde::Serialize;

use crate::{
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{
            IssuePageRequest, IssueRecord, Milestone, PullPageRequest,
            PullRecord, Release, UpdateReleaseRequest,
        },
    },
    result::Result,
};

#[derive(Debug, Serialize)]
struct MilestonesQuery {
    state: String,
}

#[derive(Debug, Serialize)]
struct IssuesQuery {
    milestone: u64,
    state: String,
    sort: String,
    direction: String,
    page: u32,
}

/// GitHub forge implementation using Octocrab for API interactions with
/// pull requests, milestones, issues, and releases.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.base_url.clone();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn list_closed_pull_requests(
        &self,
        req: PullPageRequest,
    ) -> Result<Vec<PullRecord>> {
        debug!("listing closed pull requests: page {}", req.page);

        let handler =
            self.instance.pulls(&self.config.owner, &self.config.repo);
        let mut builder = handler
            .list()
            .state(params::State::Closed)
            .sort(params::pulls::Sort::Updated)
            .direction(params::Direction::Descending)
            .page(req.page);

        if let Some(base) = req.base_branch {
            builder = builder.base(base);
        }

        let page = builder.send().await?;

        Ok(page
            .items
            .into_iter()
            .map(|pr| PullRecord {
                number: pr.number,
                title: pr.title.unwrap_or_default(),
                merged_at: pr.merged_at,
            })
            .collect())
    }

    async fn list_open_milestones(&self) -> Result<Vec<Milestone>> {
        let endpoint = format!(
            "{}/repos/{}/{}/milestones",
            self.base_uri, self.config.owner, self.config.repo
        );

        let query = MilestonesQuery {
            state: "open".into(),
        };

        let milestones: Vec<Milestone> =
            self.instance.get(endpoint, Some(&query)).await?;

        Ok(milestones)
    }

    async fn list_milestone_issues(
        &self,
        req: IssuePageRequest,
    ) -> Result<Vec<IssueRecord>> {
        debug!(
            "listing issues for milestone {}: page {}",
            req.milestone, req.page
        );

        let endpoint = format!(
            "{}/repos/{}/{}/issues",
            self.base_uri, self.config.owner, self.config.repo
        );

        let query = IssuesQuery {
            milestone: req.milestone,
            state: "all".into(),
            sort: "updated".into(),
            direction: "desc".into(),
            page: req.page,
        };

        let issues: Vec<IssueRecord> =
            self.instance.get(endpoint, Some(&query)).await?;

        Ok(issues)
    }

    async fn get_release_by_tag(&self, tag: &str) -> Result<Release> {
        let endpoint = format!(
            "{}/repos/{}/{}/releases/tags/{tag}",
            self.base_uri, self.config.owner, self.config.repo
        );

        let release: Release =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(release)
    }

    async fn update_release_body(
        &self,
        req: UpdateReleaseRequest,
    ) -> Result<()> {
        let endpoint = format!(
            "{}/repos/{}/{}/releases/{}",
            self.base_uri, self.config.owner, self.config.repo, req.id
        );

        let body = serde_json::json!({ "body": req.body });

        let _: serde_json::Value =
            self.instance.patch(endpoint, Some(&body)).await?;

        info!("updated release {}", req.id);

        Ok(())
    }
}
