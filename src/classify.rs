//! Commit message classification.
//!
//! Decides which bump categories a single conventional commit message
//! implies. The patterns are pure, immutable configuration, compiled once.

use std::sync::OnceLock;

use regex::Regex;

/// Bump categories detected while scanning commit messages along one
/// traversal. Bits only accumulate; they never reset until a tagged commit
/// stops the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpSignal {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl BumpSignal {
    /// OR another signal into this one.
    pub fn merge(&mut self, other: BumpSignal) {
        self.major |= other.major;
        self.minor |= other.minor;
        self.patch |= other.patch;
    }

    pub fn is_empty(&self) -> bool {
        !(self.major || self.minor || self.patch)
    }
}

fn patch_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^fix(\(.+\))?: ").expect("valid patch pattern"))
}

fn minor_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^feat(\(.+\))?: ").expect("valid minor pattern"))
}

fn major_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(fix|feat)(\(.+\))?!: |BREAKING CHANGE: ").expect("valid major pattern"))
}

/// Classify a commit message into the bump categories it implies.
///
/// The three checks are independent, not mutually exclusive: a `fix:` commit
/// with a `BREAKING CHANGE:` footer sets both patch and major. Type keywords
/// are matched exact-case, scope text between parentheses is accepted
/// verbatim, and messages matching none of the patterns carry no signal.
pub fn classify(message: &str) -> BumpSignal {
    BumpSignal {
        major: major_pattern().is_match(message),
        minor: minor_pattern().is_match(message),
        patch: patch_pattern().is_match(message),
    }
}
