//! Commit ancestry traversal.
//!
//! A walk starts at HEAD and moves through parent commits until it reaches
//! one that carries a tag, accumulating bump signals from every message seen
//! on the way. Two parent orders exist because a branch created before the
//! latest tag landed on the main line only reaches that tag through one
//! parent line of the eventual merge commit.

use std::collections::{HashMap, HashSet};

use git2::{Oid, Repository};
use semver::Version;

use crate::classify::{classify, BumpSignal};
use crate::error::{CcverError, Result};

/// Order in which a merge commit's parent lines are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// Exhaust the first parent line of each merge before any merged-in line.
    FirstParent,
    /// Exhaust merged-in lines before the first parent line.
    MergedParent,
}

/// Result of one history walk: the tag the walk stopped at (if any) and the
/// bump signal accumulated on the way there.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub base: Option<Version>,
    pub signal: BumpSignal,
}

/// Walk commit ancestry from HEAD in the given order until a tagged commit
/// is reached, classifying every commit message seen before it.
///
/// The tagged commit's own message is not classified; its label becomes the
/// walk's base version. Exhausting reachable history without hitting a tag
/// is not an error here: the caller reconciles the two walks and decides
/// whether that is fatal.
pub fn walk(
    repo: &Repository,
    tag_index: &HashMap<Oid, String>,
    order: WalkOrder,
) -> Result<WalkOutcome> {
    let head = repo
        .head()
        .and_then(|reference| reference.peel_to_commit())
        .map_err(CcverError::HistoryWalk)?;

    let mut signal = BumpSignal::default();
    let mut seen: HashSet<Oid> = HashSet::new();
    let mut stack = vec![head.id()];

    while let Some(oid) = stack.pop() {
        if !seen.insert(oid) {
            continue;
        }
        if let Some(label) = tag_index.get(&oid) {
            return Ok(WalkOutcome {
                base: Some(parse_tag(label)?),
                signal,
            });
        }
        let commit = repo.find_commit(oid).map_err(CcverError::HistoryWalk)?;
        signal.merge(classify(commit.message().unwrap_or_default()));

        let parents: Vec<Oid> = commit.parent_ids().collect();
        match order {
            // The stack pops last-pushed first, so the parent line that
            // should be explored first goes on top.
            WalkOrder::FirstParent => stack.extend(parents.into_iter().rev()),
            WalkOrder::MergedParent => stack.extend(parents),
        }
    }

    Ok(WalkOutcome { base: None, signal })
}

/// Parse a tag label as a semantic version, tolerating a single leading
/// `v`/`V` prefix.
///
/// A reachable tag that does not parse is a hard error rather than a skip:
/// silently ignoring it could under-report the true base version.
pub fn parse_tag(label: &str) -> Result<Version> {
    let bare = label
        .strip_prefix('v')
        .or_else(|| label.strip_prefix('V'))
        .unwrap_or(label);
    Version::parse(bare).map_err(|source| CcverError::MalformedTag {
        tag: label.to_string(),
        source,
    })
}
