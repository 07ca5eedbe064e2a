//! Version resolution orchestration.
//!
//! Builds the tag index, runs the two history walks, reconciles their
//! outcomes, and applies the winning bump to the base version.

use std::collections::HashMap;
use std::path::Path;

use git2::{Oid, Repository};
use semver::Version;

use crate::classify::BumpSignal;
use crate::error::{CcverError, Result};
use crate::walker::{walk, WalkOrder};

/// Version used when the repository carries no tags yet.
const INITIAL_VERSION: &str = "v0.1.0";

/// The category of version increment implied by a set of commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    None,
}

impl VersionBump {
    /// Pick the highest-priority bump out of a combined signal.
    pub fn from_signal(signal: BumpSignal) -> Self {
        if signal.major {
            VersionBump::Major
        } else if signal.minor {
            VersionBump::Minor
        } else if signal.patch {
            VersionBump::Patch
        } else {
            VersionBump::None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
            VersionBump::None => "none",
        }
    }

    /// Apply this bump to a base version.
    ///
    /// Major and minor bumps increment their component, reset the lower ones
    /// and drop any pre-release. A patch bump of a pre-release base only
    /// drops the pre-release without incrementing. No bump reproduces the
    /// base verbatim.
    pub fn apply(self, base: &Version) -> Version {
        match self {
            VersionBump::Major => Version::new(base.major + 1, 0, 0),
            VersionBump::Minor => Version::new(base.major, base.minor + 1, 0),
            VersionBump::Patch => {
                if base.pre.is_empty() {
                    Version::new(base.major, base.minor, base.patch + 1)
                } else {
                    Version::new(base.major, base.minor, base.patch)
                }
            }
            VersionBump::None => base.clone(),
        }
    }
}

/// Next version for the repository at `path`, formatted as
/// `vMAJOR.MINOR.PATCH`. Inspects the most recent reachable tag and the
/// commits made after it.
pub fn next_version(path: impl AsRef<Path>) -> Result<String> {
    resolve(path.as_ref(), false)
}

/// Next version-bump category for the repository at `path`: `major`,
/// `minor`, `patch`, or `none` when the commits since the latest tag carry
/// no bump signal.
pub fn next_version_type(path: impl AsRef<Path>) -> Result<String> {
    resolve(path.as_ref(), true)
}

fn resolve(path: &Path, want_type: bool) -> Result<String> {
    let repo = Repository::discover(path).map_err(CcverError::RepositoryOpen)?;

    let tag_index = index_tags(&repo)?;
    if tag_index.is_empty() {
        // No release yet. The first one is conventionally a feature.
        let output = if want_type { "minor" } else { INITIAL_VERSION };
        return Ok(output.to_string());
    }

    // Both parent orders are walked so that a branch which diverged before
    // the latest tag landed on the main line still finds that tag through
    // the other line of the merge.
    let main = walk(&repo, &tag_index, WalkOrder::FirstParent)?;
    let branch = walk(&repo, &tag_index, WalkOrder::MergedParent)?;

    // The authoritative base is the numerically greatest reachable tag, not
    // whichever one a particular order happened to reach first.
    let base = match (main.base, branch.base) {
        (Some(a), Some(b)) => std::cmp::max(a, b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return Err(CcverError::UnreachableTags),
    };

    let mut signal = main.signal;
    signal.merge(branch.signal);
    let bump = VersionBump::from_signal(signal);

    if want_type {
        return Ok(bump.label().to_string());
    }
    Ok(format!("v{}", bump.apply(&base)))
}

/// Map every tag in the repository to the commit it points at. Annotated
/// tags are peeled down to their target commit.
fn index_tags(repo: &Repository) -> Result<HashMap<Oid, String>> {
    let names = repo.tag_names(None).map_err(CcverError::TagEnumeration)?;

    let mut index = HashMap::new();
    for name in names.iter().flatten() {
        let reference = repo
            .find_reference(&format!("refs/tags/{}", name))
            .map_err(CcverError::TagEnumeration)?;
        let target = reference
            .peel(git2::ObjectType::Commit)
            .map_err(CcverError::TagEnumeration)?;
        index.insert(target.id(), name.to_string());
    }
    Ok(index)
}
