pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod settings;
pub mod ui;
pub mod versioning;

pub use boundary::{legacy_warnings, semver2_warnings, BoundaryWarning};
pub use error::{Result, VersioningError};
pub use settings::{VersionSettings, VersionSettingsSemVer2};
pub use versioning::{
    compose_version, legacy_version, legacy_version_from_branch, semver2_version,
    semver2_version_from_branch, semver2_with_suffix, version_with_suffix,
};
