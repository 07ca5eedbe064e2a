//! Next-version computation over conventional commit history.
//!
//! Walks the commit graph back from HEAD to the most recent reachable tag,
//! classifies the commit messages seen on the way, and derives the semantic
//! version (or bump category) the next release should carry.

pub mod classify;
pub mod error;
pub mod resolver;
pub mod walker;

pub use error::{CcverError, Result};
pub use resolver::{next_version, next_version_type};
