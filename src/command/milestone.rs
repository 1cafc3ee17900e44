//! Milestone action: collect every issue under a named milestone.
use log::*;
use std::path::PathBuf;

use crate::{
    collector, command::common, forge::traits::Forge, result::Result,
};

/// Parameters for the milestone action.
#[derive(Debug, Clone)]
pub struct MilestoneRequest {
    pub title: String,
    pub output: Option<PathBuf>,
}

pub async fn execute(forge: &dyn Forge, req: MilestoneRequest) -> Result<()> {
    info!("collecting issues for milestone: {}", req.title);

    match collector::milestone::collect(forge, &req.title).await? {
        Some(notes) => {
            common::write_notes(&notes, req.output.as_deref()).await
        }
        None => {
            // benign: no output file is written and the process exits zero
            warn!("milestone {} not found", req.title);
            Ok(())
        }
    }
}
