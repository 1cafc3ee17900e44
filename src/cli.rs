//! CLI argument parsing and remote connection configuration.
use clap::Parser;
use color_eyre::eyre::eyre;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{
    command::{
        milestone::MilestoneRequest, recent::RecentRequest,
        update::UpdateRequest,
    },
    forge::config::RemoteConfig,
    result::Result,
};

pub const DEFAULT_HOST: &str = "https://api.github.com";
pub const DEFAULT_HOURS: f64 = 24.0;

/// CLI arguments for collecting and publishing release notes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    /// GitHub API base URL, for enterprise hosts.
    pub host: String,

    #[arg(long, default_value = "")]
    /// Repository owner or organization.
    pub owner: String,

    #[arg(long, default_value = "")]
    /// Repository name.
    pub repository: String,

    #[arg(long, default_value = "")]
    /// Action to run: recent, milestone or update.
    pub action: String,

    #[arg(long, default_value_t = DEFAULT_HOURS)]
    /// Recency window in hours for the recent action.
    pub hours: f64,

    #[arg(long)]
    /// Milestone title for the milestone action.
    pub milestone: Option<String>,

    #[arg(long)]
    /// Base branch filter for the recent action.
    pub branch: Option<String>,

    #[arg(long)]
    /// File containing prepared notes for the update action.
    pub input: Option<String>,

    #[arg(long)]
    /// Output file for collected notes.
    pub output: Option<String>,

    #[arg(long)]
    /// Release tag for the update action.
    pub name: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure the remote connection from CLI arguments, resolving the
    /// token from the GITHUB_TOKEN env var when the flag is unset.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        if self.owner.is_empty() {
            return Err(eyre!("must set repository owner"));
        }

        if self.repository.is_empty() {
            return Err(eyre!("must set repository name"));
        }

        let mut token = self.token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(eyre!("must set github token"));
        }

        Ok(RemoteConfig {
            base_url: self.host.clone(),
            owner: self.owner.clone(),
            repo: self.repository.clone(),
            token: SecretString::from(token),
        })
    }

    pub fn recent_request(&self) -> RecentRequest {
        RecentRequest {
            branch: self.branch.clone(),
            hours: self.hours,
            output: self.output.clone().map(PathBuf::from),
        }
    }

    pub fn milestone_request(&self) -> Result<MilestoneRequest> {
        let title = self
            .milestone
            .clone()
            .ok_or(eyre!("must set --milestone for the milestone action"))?;

        Ok(MilestoneRequest {
            title,
            output: self.output.clone().map(PathBuf::from),
        })
    }

    pub fn update_request(&self) -> Result<UpdateRequest> {
        let tag = self
            .name
            .clone()
            .ok_or(eyre!("must set --name for the update action"))?;

        let input = self
            .input
            .clone()
            .ok_or(eyre!("must set --input for the update action"))?;

        Ok(UpdateRequest {
            tag,
            input: PathBuf::from(input),
        })
    }
}
