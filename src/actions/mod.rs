//! File actions module.
//!
//! Currently this only covers the deletion primitive used by the
//! resolution engine, including its dry-run (test mode) variant.

pub mod delete;

pub use delete::{DeleteError, Deleter};
