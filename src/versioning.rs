//! Entry points building complete version strings
//!
//! Every function here is pure: the result depends only on the arguments.
//! The only failures are a missing branch name and a filter that is not a
//! valid regular expression.

use tracing::debug;

use crate::domain::suffix::{
    compose_suffix, compose_suffix_semver2, normalize_suffix, normalize_suffix_semver2,
    SuffixSeparator, LEGACY_SUFFIX_LIMIT, SEMVER2_SUFFIX_LIMIT,
};
use crate::domain::version::{bump_patch, Version};
use crate::error::Result;
use crate::settings::{VersionSettings, VersionSettingsSemVer2};

/// Join numeric components with `.`, four of them when `build` is given
pub fn compose_version(major: i64, minor: i64, patch: i64, build: Option<i64>) -> String {
    let version = match build {
        Some(build) => Version::with_build(major, minor, patch, build),
        None => Version::new(major, minor, patch),
    };
    version.to_string()
}

/// Build a legacy version, e.g. `1.0.0-feature-login`.
///
/// # Arguments
/// * `build` - Optional fourth component
/// * `settings` - Suffix settings; `branch_name` must be set
///
/// # Returns
/// * `Ok(String)` - Numeric version followed by the suffix (if any)
/// * `Err(MissingBranchName)` - If `settings.branch_name` is `None`
///
/// # Example
/// ```
/// use branch_version::{legacy_version, VersionSettings};
///
/// let settings = VersionSettings::new("refs/heads/feature/test_cake_version");
/// assert_eq!(
///     legacy_version(1, 0, 0, None, &settings).unwrap(),
///     "1.0.0-feature-test-cake-v"
/// );
/// ```
pub fn legacy_version(
    major: i64,
    minor: i64,
    patch: i64,
    build: Option<i64>,
    settings: &VersionSettings,
) -> Result<String> {
    let branch = settings.branch_name()?;
    let version = compose_version(major, minor, patch, build);
    let suffix = compose_suffix(settings)?;

    debug!(branch, %version, %suffix, "composed legacy version");
    Ok(format!("{}{}", version, suffix))
}

/// [`legacy_version`] with default settings for `branch`
pub fn legacy_version_from_branch(
    major: i64,
    minor: i64,
    patch: i64,
    build: Option<i64>,
    branch: &str,
) -> Result<String> {
    legacy_version(major, minor, patch, build, &VersionSettings::new(branch))
}

/// Build a SemVer 2.0.0 version, e.g. `1.0.0-login.12.abcdabcd` or
/// `1.0.3+abcdabcd`.
///
/// On final branches the patch component is advanced by the branch change
/// number.
///
/// # Example
/// ```
/// use branch_version::{semver2_version, VersionSettingsSemVer2};
///
/// let settings = VersionSettingsSemVer2::new("refs/heads/master").with_hash("abcdabcd");
/// assert_eq!(semver2_version(1, 0, 0, &settings).unwrap(), "1.0.0+abcdabcd");
/// ```
pub fn semver2_version(
    major: i64,
    minor: i64,
    patch: i64,
    settings: &VersionSettingsSemVer2,
) -> Result<String> {
    let trimmed = settings.base.trimmed_branch()?;
    let bumped = bump_patch(patch, &trimmed, settings)?;
    if bumped != patch {
        debug!(branch = %trimmed, from = patch, to = bumped, "bumped patch on final branch");
    }

    let version = compose_version(major, minor, bumped, None);
    let suffix = compose_suffix_semver2(settings)?;

    debug!(branch = %trimmed, %version, %suffix, "composed semver2 version");
    Ok(format!("{}{}", version, suffix))
}

/// [`semver2_version`] with default settings for `branch` and `hash`
pub fn semver2_version_from_branch(
    major: i64,
    minor: i64,
    patch: i64,
    branch: &str,
    hash: Option<&str>,
) -> Result<String> {
    let mut settings = VersionSettingsSemVer2::new(branch);
    settings.hash = hash.map(str::to_string);
    semver2_version(major, minor, patch, &settings)
}

/// Build a legacy version from an explicit suffix instead of a branch name.
///
/// The suffix is normalized like a branch label and capped at
/// [`LEGACY_SUFFIX_LIMIT`] characters. A suffix that normalizes to nothing
/// adds nothing, not even the separator.
pub fn version_with_suffix(
    major: i64,
    minor: i64,
    patch: i64,
    build: Option<i64>,
    suffix: &str,
) -> String {
    let version = compose_version(major, minor, patch, build);
    let suffix = normalize_suffix(suffix, LEGACY_SUFFIX_LIMIT);
    if suffix.is_empty() {
        return version;
    }

    format!("{}{}{}", version, SuffixSeparator::PreRelease, suffix)
}

/// Build a SemVer 2.0.0 version from an explicit suffix.
///
/// `prerelease` selects `-` (pre-release label) or `+` (build metadata).
/// Dots are kept, so `rc.1` stays two identifiers.
pub fn semver2_with_suffix(
    major: i64,
    minor: i64,
    patch: i64,
    suffix: &str,
    prerelease: bool,
) -> String {
    let version = compose_version(major, minor, patch, None);
    let suffix = normalize_suffix_semver2(suffix, SEMVER2_SUFFIX_LIMIT);
    if suffix.is_empty() {
        return version;
    }

    let separator = if prerelease {
        SuffixSeparator::PreRelease
    } else {
        SuffixSeparator::BuildMetadata
    };
    format!("{}{}{}", version, separator, suffix)
}
