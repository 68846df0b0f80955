//! Domain logic - pure string rules turning a branch name into a version label

pub mod branch;
pub mod prerelease;
pub mod suffix;
pub mod version;

pub use branch::{apply_branch_prefix, needs_branch_prefix, trim_branch};
pub use prerelease::{BranchKind, ReleaseFilters};
pub use suffix::{compose_suffix, compose_suffix_semver2, SemVer2Suffix, SuffixSeparator};
pub use version::{bump_patch, Version};
