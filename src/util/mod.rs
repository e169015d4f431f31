//! Shared helpers: storage adapter glue and timestamp formatting.

pub mod format;
pub mod persistence;
