//! Version suffix composition for the legacy and SemVer 2.0.0 schemes
//!
//! Both schemes share the same steps: trim the branch, classify it, build an
//! unnormalized suffix body, then rewrite disallowed characters to `-`, cap
//! the length and drop trailing dashes.

use crate::domain::branch::apply_branch_prefix;
use crate::domain::prerelease::{BranchKind, ReleaseFilters};
use crate::error::Result;
use crate::settings::{VersionSettings, VersionSettingsSemVer2};
use std::fmt;

/// Maximum length of a legacy suffix, leading `-` included
pub const LEGACY_SUFFIX_LIMIT: usize = 20;

/// Maximum length of a SemVer 2.0.0 suffix body
pub const SEMVER2_SUFFIX_LIMIT: usize = 255;

/// The branch part of a SemVer 2.0.0 suffix is capped first so the change
/// number and hash still fit within [`SEMVER2_SUFFIX_LIMIT`].
pub const SEMVER2_BRANCH_LIMIT: usize = 200;

/// Separator between the numeric version and its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixSeparator {
    /// `-`
    PreRelease,
    /// `+`
    BuildMetadata,
}

impl SuffixSeparator {
    pub fn for_kind(kind: BranchKind) -> Self {
        match kind {
            BranchKind::PreRelease => SuffixSeparator::PreRelease,
            BranchKind::Final => SuffixSeparator::BuildMetadata,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SuffixSeparator::PreRelease => "-",
            SuffixSeparator::BuildMetadata => "+",
        }
    }
}

impl fmt::Display for SuffixSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characters kept as-is in a legacy suffix
pub fn is_legacy_suffix_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Characters kept as-is in a SemVer 2.0.0 suffix
pub fn is_semver2_suffix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

fn normalize_with(suffix: &str, max_len: usize, keep: fn(char) -> bool) -> String {
    let mut normalized: String = suffix
        .chars()
        .map(|c| if keep(c) { c } else { '-' })
        .collect();
    // ASCII only from here on, so byte truncation is safe
    normalized.truncate(max_len);
    normalized.trim_end_matches('-').to_string()
}

/// Rewrite everything outside `[A-Za-z0-9]` to `-`, cap at `max_len` and
/// strip trailing dashes
pub fn normalize_suffix(suffix: &str, max_len: usize) -> String {
    normalize_with(suffix, max_len, is_legacy_suffix_char)
}

/// Like [`normalize_suffix`] but keeps `.` identifier separators
pub fn normalize_suffix_semver2(suffix: &str, max_len: usize) -> String {
    normalize_with(suffix, max_len, is_semver2_suffix_char)
}

/// The legacy suffix before normalization: `-<branch>` for pre-release
/// branches, empty for final ones.
pub fn legacy_suffix_body(settings: &VersionSettings) -> Result<String> {
    let branch = settings.trimmed_branch()?;
    let filters = ReleaseFilters::compile(settings.pre_release_filters.as_deref())?;

    if filters.classify(&branch).is_final() {
        return Ok(String::new());
    }

    let branch = apply_branch_prefix(
        &branch,
        &settings.branch_prefix,
        settings.always_apply_branch_prefix,
    );
    Ok(format!("{}{}", SuffixSeparator::PreRelease, branch))
}

/// Build the legacy suffix, `-xxxx` or empty
///
/// # Returns
/// * `Ok(String)` - At most [`LEGACY_SUFFIX_LIMIT`] characters
/// * `Err` - If the branch name is missing or a filter does not compile
pub fn compose_suffix(settings: &VersionSettings) -> Result<String> {
    let body = legacy_suffix_body(settings)?;
    let suffix = normalize_suffix(&body, LEGACY_SUFFIX_LIMIT);

    // A pre-release label that normalizes away would read as a final version
    if suffix.is_empty() && !body.is_empty() {
        let fallback = format!("{}{}", SuffixSeparator::PreRelease, settings.branch_prefix);
        return Ok(normalize_suffix(&fallback, LEGACY_SUFFIX_LIMIT));
    }

    Ok(suffix)
}

/// An unnormalized SemVer 2.0.0 suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer2Suffix {
    pub kind: BranchKind,
    pub separator: SuffixSeparator,
    /// Branch (capped and prefixed), change number and hash joined by `.`
    /// for pre-release branches; the hash alone for final ones.
    pub body: String,
}

/// Cap a trimmed branch at [`SEMVER2_BRANCH_LIMIT`] characters
pub fn cap_semver2_branch(branch: &str) -> String {
    branch.chars().take(SEMVER2_BRANCH_LIMIT).collect()
}

pub fn semver2_suffix_body(settings: &VersionSettingsSemVer2) -> Result<SemVer2Suffix> {
    let base = &settings.base;
    let branch = cap_semver2_branch(&base.trimmed_branch()?);
    let filters = ReleaseFilters::compile(base.pre_release_filters.as_deref())?;
    let kind = filters.classify(&branch);

    let body = match kind {
        BranchKind::PreRelease => {
            let mut body =
                apply_branch_prefix(&branch, &base.branch_prefix, base.always_apply_branch_prefix);
            if let Some(number) = settings.branch_change_number {
                body.push('.');
                body.push_str(&number.to_string());
            }
            if let Some(hash) = &settings.hash {
                body.push('.');
                body.push_str(hash);
            }
            body
        }
        BranchKind::Final => settings.hash.clone().unwrap_or_default(),
    };

    Ok(SemVer2Suffix {
        kind,
        separator: SuffixSeparator::for_kind(kind),
        body,
    })
}

/// Build the SemVer 2.0.0 suffix: `-<label>` for pre-release branches,
/// `+<hash>` for final ones, or empty when there is nothing to append.
pub fn compose_suffix_semver2(settings: &VersionSettingsSemVer2) -> Result<String> {
    let suffix = semver2_suffix_body(settings)?;
    if suffix.body.is_empty() {
        return Ok(String::new());
    }

    Ok(format!(
        "{}{}",
        suffix.separator,
        normalize_suffix_semver2(&suffix.body, SEMVER2_SUFFIX_LIMIT)
    ))
}
