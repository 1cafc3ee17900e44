//! Update action: append prepared notes to an existing release description.
use color_eyre::eyre::Context;
use log::*;
use std::path::PathBuf;
use tokio::fs;

use crate::{
    forge::{traits::Forge, types::UpdateReleaseRequest},
    result::Result,
};

/// Parameters for the update action.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub tag: String,
    pub input: PathBuf,
}

/// Join prepared notes onto a release's existing description with a single
/// newline; an absent description joins as the empty string.
fn compose_body(existing: Option<&str>, notes: &str) -> String {
    format!("{}\n{}", existing.unwrap_or_default(), notes)
}

pub async fn execute(forge: &dyn Forge, req: UpdateRequest) -> Result<()> {
    let notes = fs::read_to_string(&req.input).await.wrap_err(format!(
        "no release notes found at: {}",
        req.input.display()
    ))?;

    let release = forge.get_release_by_tag(&req.tag).await?;

    debug!("resolved release tag {} to id {}", req.tag, release.id);

    let body = compose_body(release.body.as_deref(), &notes);

    forge
        .update_release_body(UpdateReleaseRequest {
            id: release.id,
            body,
        })
        .await?;

    info!("updated release notes for: {}", req.tag);

    Ok(())
}
