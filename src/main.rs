use clap::Parser;
use color_eyre::eyre::eyre;
use log::*;

mod cli;
mod collector;
mod command;
mod forge;
mod result;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("gh_release_notes")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();

    initialize_logger(args.debug)?;

    info!("gh-release-notes {}", env!("CARGO_PKG_VERSION"));

    let remote = args.get_remote()?;
    let forge = forge::github::Github::new(remote)?;

    match args.action.as_str() {
        "recent" => {
            command::recent::execute(&forge, args.recent_request()).await
        }
        "milestone" => {
            command::milestone::execute(&forge, args.milestone_request()?)
                .await
        }
        "update" => {
            command::update::execute(&forge, args.update_request()?).await
        }
        other => Err(eyre!("unknown action argument: {other}")),
    }
}
