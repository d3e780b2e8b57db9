#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Unused media detection
//!
//! Two independent scans feed a set difference:
//! - [`FilesystemScanner`] walks the media root for files physically present
//! - [`ReferenceScanner`] resolves every file reference held by a record
//!
//! [`find_unused`] subtracts the second from the first.

mod diff;
mod filesystem;
mod pattern;
mod references;

pub use diff::{find_unused, unused};
pub use filesystem::FilesystemScanner;
pub use pattern::ExcludePattern;
pub use references::ReferenceScanner;
