use crate::domain::prerelease::ReleaseFilters;
use crate::error::{Result, VersioningError};
use crate::settings::VersionSettingsSemVer2;
use std::fmt;

/// Numeric version components, `major.minor.patch[.build]`
///
/// Components are not validated; negative values are written as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
    pub build: Option<i64>,
}

impl Version {
    /// Create a three-component version
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        Version {
            major,
            minor,
            patch,
            build: None,
        }
    }

    /// Create a four-component version
    pub fn with_build(major: i64, minor: i64, patch: i64, build: i64) -> Self {
        Version {
            major,
            minor,
            patch,
            build: Some(build),
        }
    }

    /// Parse a version string (e.g., "v1.2.3" -> Version(1,2,3), "1.2.3.4" -> Version(1,2,3,4))
    pub fn parse(input: &str) -> Result<Self> {
        let clean = input.trim().trim_start_matches('v').trim_start_matches('V');

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(VersioningError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z or X.Y.Z.B",
                input
            )));
        }

        let component = |name: &str, raw: &str| {
            raw.parse::<i64>().map_err(|_| {
                VersioningError::version(format!("Invalid {} version: {}", name, raw))
            })
        };

        let major = component("major", parts[0])?;
        let minor = component("minor", parts[1])?;
        let patch = component("patch", parts[2])?;
        let build = match parts.get(3) {
            Some(raw) => Some(component("build", raw)?),
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            build,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
        }
        Ok(())
    }
}

/// Patch component for a SemVer 2.0.0 version.
///
/// Final branches carry no pre-release label to tell successive builds
/// apart, so their patch is advanced by the branch change number instead.
/// Pre-release branches keep `patch` unchanged.
pub fn bump_patch(
    patch: i64,
    trimmed_branch: &str,
    settings: &VersionSettingsSemVer2,
) -> Result<i64> {
    let filters = ReleaseFilters::compile(settings.base.pre_release_filters.as_deref())?;
    if filters.matches_any(trimmed_branch) {
        Ok(patch.saturating_add(settings.branch_change_number.unwrap_or(0)))
    } else {
        Ok(patch)
    }
}
