//! Final/pre-release classification of trimmed branch names
//!
//! A branch is final when its trimmed name matches at least one release
//! filter. Filters are unanchored regular expressions; callers add `^` and
//! `$` themselves when a full match is wanted.

use crate::error::Result;
use regex::RegexSet;
use std::fmt;

/// How a trimmed branch name is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// Matches a release filter: no pre-release label
    Final,
    /// Matches no release filter, or filters are disabled
    PreRelease,
}

impl BranchKind {
    pub fn is_final(self) -> bool {
        self == BranchKind::Final
    }

    pub fn is_pre_release(self) -> bool {
        self == BranchKind::PreRelease
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchKind::Final => write!(f, "final"),
            BranchKind::PreRelease => write!(f, "pre-release"),
        }
    }
}

/// Compiled release filters
#[derive(Debug, Clone)]
pub struct ReleaseFilters {
    set: Option<RegexSet>,
}

impl ReleaseFilters {
    /// Compile the filters; `None` disables final-branch detection
    ///
    /// # Returns
    /// * `Ok(ReleaseFilters)` - Compiled filters
    /// * `Err` - If any pattern is not a valid regular expression
    pub fn compile(patterns: Option<&[String]>) -> Result<Self> {
        let set = match patterns {
            Some(patterns) => Some(RegexSet::new(patterns)?),
            None => None,
        };
        Ok(ReleaseFilters { set })
    }

    /// True when the branch matches at least one filter
    pub fn matches_any(&self, trimmed_branch: &str) -> bool {
        self.set
            .as_ref()
            .is_some_and(|set| set.is_match(trimmed_branch))
    }

    pub fn classify(&self, trimmed_branch: &str) -> BranchKind {
        if self.matches_any(trimmed_branch) {
            BranchKind::Final
        } else {
            BranchKind::PreRelease
        }
    }
}

/// Compile `filters` and classify `trimmed_branch` in one step
pub fn classify(trimmed_branch: &str, filters: Option<&[String]>) -> Result<BranchKind> {
    Ok(ReleaseFilters::compile(filters)?.classify(trimmed_branch))
}
