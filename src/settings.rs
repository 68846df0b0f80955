//! Per-call settings describing how a branch name becomes a version suffix.

use crate::domain::branch::trim_branch;
use crate::error::{Result, VersioningError};

/// Prefix injected before labels that carry no ASCII letter.
pub const DEFAULT_BRANCH_PREFIX: &str = "b-";

/// Returns the default final-release patterns.
pub fn default_pre_release_filters() -> Vec<String> {
    vec!["^master$".to_string(), "^release/".to_string()]
}

/// Settings for the legacy dotted-suffix scheme.
///
/// `branch_name` is optional only so that a missing name can be reported as
/// [`VersioningError::MissingBranchName`] at the point a version is built.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionSettings {
    pub branch_name: Option<String>,

    /// Regexes matched against the trimmed branch; a match marks the branch
    /// as final. `None` disables final-branch detection entirely.
    pub pre_release_filters: Option<Vec<String>>,

    /// Strip `refs/heads/`, `refs/tags/` and `refs/remotes/`.
    pub filter_git_references: bool,

    /// Literal substrings removed from the branch name, in order.
    pub trim_patterns: Option<Vec<String>>,

    pub branch_prefix: String,

    pub always_apply_branch_prefix: bool,
}

impl Default for VersionSettings {
    fn default() -> Self {
        VersionSettings {
            branch_name: None,
            pre_release_filters: Some(default_pre_release_filters()),
            filter_git_references: true,
            trim_patterns: None,
            branch_prefix: DEFAULT_BRANCH_PREFIX.to_string(),
            always_apply_branch_prefix: false,
        }
    }
}

impl VersionSettings {
    /// Create settings for a branch with every other field at its default
    pub fn new(branch_name: impl Into<String>) -> Self {
        VersionSettings {
            branch_name: Some(branch_name.into()),
            ..Default::default()
        }
    }

    pub fn with_pre_release_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pre_release_filters = Some(filters.into_iter().map(Into::into).collect());
        self
    }

    /// Disable final-branch detection: every branch yields a pre-release suffix
    pub fn without_pre_release_filters(mut self) -> Self {
        self.pre_release_filters = None;
        self
    }

    pub fn with_trim_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trim_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_filter_git_references(mut self, enabled: bool) -> Self {
        self.filter_git_references = enabled;
        self
    }

    pub fn with_branch_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.branch_prefix = prefix.into();
        self
    }

    pub fn with_always_apply_branch_prefix(mut self, enabled: bool) -> Self {
        self.always_apply_branch_prefix = enabled;
        self
    }

    /// The raw branch name, or `MissingBranchName` when none was supplied
    pub fn branch_name(&self) -> Result<&str> {
        self.branch_name
            .as_deref()
            .ok_or(VersioningError::MissingBranchName)
    }

    /// The branch name after git reference and trim pattern removal
    pub fn trimmed_branch(&self) -> Result<String> {
        Ok(trim_branch(
            self.branch_name()?,
            self.filter_git_references,
            self.trim_patterns.as_deref(),
        ))
    }
}

/// Settings for the SemVer 2.0.0 scheme.
///
/// Carries the legacy settings plus build metadata and the change counter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionSettingsSemVer2 {
    pub base: VersionSettings,

    /// Commit hash or other build metadata
    pub hash: Option<String>,

    /// Monotonic counter appended to pre-release suffixes and added to the
    /// patch component on final branches
    pub branch_change_number: Option<i64>,
}

impl VersionSettingsSemVer2 {
    pub fn new(branch_name: impl Into<String>) -> Self {
        VersionSettingsSemVer2::from_base(VersionSettings::new(branch_name))
    }

    pub fn from_base(base: VersionSettings) -> Self {
        VersionSettingsSemVer2 {
            base,
            hash: None,
            branch_change_number: None,
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_branch_change_number(mut self, number: i64) -> Self {
        self.branch_change_number = Some(number);
        self
    }
}

impl From<VersionSettings> for VersionSettingsSemVer2 {
    fn from(base: VersionSettings) -> Self {
        VersionSettingsSemVer2::from_base(base)
    }
}
