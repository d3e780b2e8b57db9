//! Operations facade
//!
//! Re-exports the operation functions from their modules so callers have a
//! single import path.

pub use crate::maintenance::{cleanup, sweep};
pub use crate::query::{find_unused, list_models, possible_models, validate_include_models};
