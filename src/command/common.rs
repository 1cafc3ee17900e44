//! Shared output stage for the collection actions.
use log::*;
use std::path::Path;
use tokio::fs;

use crate::result::Result;

/// Persist fully collected notes, or discard them when no output file was
/// requested. The write happens once, after collection completes, as a
/// whole-file overwrite, so a failed collection never leaves a partial file.
pub async fn write_notes(notes: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            info!(
                "writing {} bytes of release notes to: {}",
                notes.len(),
                path.display()
            );
            fs::write(path, notes).await?;
        }
        None => {
            debug!("no output file requested: discarding collected notes");
        }
    }

    Ok(())
}
