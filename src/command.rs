//! Action implementations dispatched from main.
pub mod common;
pub mod milestone;
pub mod recent;
pub mod update;
