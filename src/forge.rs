//! GitHub API access: connection config, record types, and the Forge trait.
pub mod config;
pub mod github;
pub mod traits;
pub mod types;
