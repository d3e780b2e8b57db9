#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Quarantine lifecycle for unused media
//!
//! Unused files are moved into `MediaRoot/<quarantine>/<bucket>/<relative path>`
//! rather than deleted, and whole buckets are purged once they fall outside
//! the retention window. Directories emptied by a cleanup can be pruned.

mod mover;
mod prune;
mod remove;
mod sweeper;

pub use mover::QuarantineMover;
pub use prune::prune_empty_dirs;
pub use remove::delete_media;
pub use sweeper::RetentionSweeper;
