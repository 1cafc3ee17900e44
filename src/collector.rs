//! Result-collection engine: the pagination protocol and the collectors
//! built on top of it.
pub mod milestone;
pub mod pager;
pub mod recent;

/// One unit of output, materialized identically whether sourced from a pull
/// request or an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub number: u64,
    pub title: String,
}

impl Entry {
    /// Render as one release-notes line.
    pub fn line(&self) -> String {
        format!("- [{}] {}\n", self.number, self.title)
    }
}
