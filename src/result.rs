//! Error handling and result types for gh-release-notes.
//!
//! All fallible functions return the `Result<T>` alias defined here, backed
//! by `color-eyre` for contextual error reports. Transport failures are
//! never caught locally: they propagate to `main` and exit the process
//! non-zero.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout gh-release-notes.
pub type Result<T> = EyreResult<T>;
