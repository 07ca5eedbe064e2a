use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum CcverError {
    #[error("couldn't open git repository: {0}")]
    RepositoryOpen(#[source] git2::Error),

    #[error("couldn't read tags: {0}")]
    TagEnumeration(#[source] git2::Error),

    #[error("couldn't walk commit history: {0}")]
    HistoryWalk(#[source] git2::Error),

    #[error("couldn't parse tag \"{tag}\": {source}")]
    MalformedTag {
        tag: String,
        source: semver::Error,
    },

    #[error("tags exist in the repository, but not in ancestors of HEAD")]
    UnreachableTags,
}

/// Convenience type alias for Results in ccver
pub type Result<T> = std::result::Result<T, CcverError>;
