use std::fmt;

use crate::domain::suffix::{
    is_legacy_suffix_char, is_semver2_suffix_char, legacy_suffix_body, normalize_suffix,
    normalize_suffix_semver2, semver2_suffix_body, LEGACY_SUFFIX_LIMIT, SEMVER2_BRANCH_LIMIT,
    SEMVER2_SUFFIX_LIMIT,
};
use crate::error::Result;
use crate::settings::{VersionSettings, VersionSettingsSemVer2};

/// Places where a branch name hit a limit of the version scheme.
/// These are non-fatal: the version is still produced, but its label no
/// longer reads like the branch the user passed in.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Reference filtering and trim patterns left nothing of the branch
    EmptyBranch { branch: String },
    /// Branch part of a SemVer 2.0.0 label cut to its character limit
    BranchTruncated { branch: String, limit: usize },
    /// Normalized suffix cut to its character limit
    SuffixTruncated { suffix: String, limit: usize },
    /// Characters outside the allowed set were rewritten to `-`
    CharactersReplaced { original: String, replaced: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::EmptyBranch { branch } => {
                write!(f, "Branch '{}' is empty after trimming", branch)
            }
            BoundaryWarning::BranchTruncated { branch, limit } => {
                let preview: String = branch.chars().take(24).collect();
                write!(
                    f,
                    "Branch '{}...' is longer than {} characters and was truncated",
                    preview, limit
                )
            }
            BoundaryWarning::SuffixTruncated { suffix, limit } => {
                write!(
                    f,
                    "Suffix '{}' is longer than {} characters and was truncated",
                    suffix, limit
                )
            }
            BoundaryWarning::CharactersReplaced { original, replaced } => {
                write!(
                    f,
                    "Suffix '{}' contains unsupported characters, written as '{}'",
                    original, replaced
                )
            }
        }
    }
}

fn normalization_warnings(
    body: &str,
    limit: usize,
    normalize: fn(&str, usize) -> String,
    allowed: fn(char) -> bool,
    warnings: &mut Vec<BoundaryWarning>,
) {
    if body.is_empty() {
        return;
    }

    let uncapped = normalize(body, usize::MAX);
    if uncapped.len() > limit {
        warnings.push(BoundaryWarning::SuffixTruncated {
            suffix: uncapped.clone(),
            limit,
        });
    }

    if body.chars().any(|c| c != '-' && !allowed(c)) {
        warnings.push(BoundaryWarning::CharactersReplaced {
            original: body.to_string(),
            replaced: uncapped,
        });
    }
}

/// Boundary warnings for a legacy version built from `settings`
pub fn legacy_warnings(settings: &VersionSettings) -> Result<Vec<BoundaryWarning>> {
    let mut warnings = Vec::new();
    let branch = settings.branch_name()?;

    if settings.trimmed_branch()?.is_empty() {
        warnings.push(BoundaryWarning::EmptyBranch {
            branch: branch.to_string(),
        });
    }

    let body = legacy_suffix_body(settings)?;
    normalization_warnings(
        &body,
        LEGACY_SUFFIX_LIMIT,
        normalize_suffix,
        is_legacy_suffix_char,
        &mut warnings,
    );

    Ok(warnings)
}

/// Boundary warnings for a SemVer 2.0.0 version built from `settings`
pub fn semver2_warnings(settings: &VersionSettingsSemVer2) -> Result<Vec<BoundaryWarning>> {
    let mut warnings = Vec::new();
    let branch = settings.base.branch_name()?;
    let trimmed = settings.base.trimmed_branch()?;

    if trimmed.is_empty() {
        warnings.push(BoundaryWarning::EmptyBranch {
            branch: branch.to_string(),
        });
    }

    let suffix = semver2_suffix_body(settings)?;
    if suffix.kind.is_pre_release() && trimmed.chars().count() > SEMVER2_BRANCH_LIMIT {
        warnings.push(BoundaryWarning::BranchTruncated {
            branch: trimmed,
            limit: SEMVER2_BRANCH_LIMIT,
        });
    }

    normalization_warnings(
        &suffix.body,
        SEMVER2_SUFFIX_LIMIT,
        normalize_suffix_semver2,
        is_semver2_suffix_char,
        &mut warnings,
    );

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_warnings_for_clean_branch() {
        let settings = VersionSettings::new("develop");
        assert!(legacy_warnings(&settings).unwrap().is_empty());
    }

    #[test]
    fn test_no_warnings_for_final_branch() {
        let settings = VersionSettings::new("refs/heads/master");
        assert!(legacy_warnings(&settings).unwrap().is_empty());
    }

    #[test]
    fn test_empty_branch_warning() {
        let settings = VersionSettings::new("refs/heads/feature/").with_trim_patterns(["feature/"]);
        let warnings = legacy_warnings(&settings).unwrap();
        assert!(warnings.contains(&BoundaryWarning::EmptyBranch {
            branch: "refs/heads/feature/".to_string()
        }));
    }

    #[test]
    fn test_legacy_truncation_and_replacement() {
        let settings = VersionSettings::new("feature/test_cake_version");
        let warnings = legacy_warnings(&settings).unwrap();
        assert_eq!(
            warnings,
            vec![
                BoundaryWarning::SuffixTruncated {
                    suffix: "-feature-test-cake-version".to_string(),
                    limit: LEGACY_SUFFIX_LIMIT,
                },
                BoundaryWarning::CharactersReplaced {
                    original: "-feature/test_cake_version".to_string(),
                    replaced: "-feature-test-cake-version".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_semver2_branch_truncated() {
        let settings = VersionSettingsSemVer2::new("a".repeat(255)).with_hash("abcd");
        let warnings = semver2_warnings(&settings).unwrap();
        assert_eq!(
            warnings,
            vec![BoundaryWarning::BranchTruncated {
                branch: "a".repeat(255),
                limit: SEMVER2_BRANCH_LIMIT,
            }]
        );
    }

    #[test]
    fn test_semver2_plus_in_branch_is_replaced() {
        let settings = VersionSettingsSemVer2::new("fix+meta");
        let warnings = semver2_warnings(&settings).unwrap();
        assert_eq!(
            warnings,
            vec![BoundaryWarning::CharactersReplaced {
                original: "fix+meta".to_string(),
                replaced: "fix-meta".to_string(),
            }]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = BoundaryWarning::SuffixTruncated {
            suffix: "-feature-test-cake-version".to_string(),
            limit: 20,
        };
        let msg = warning.to_string();
        assert!(msg.contains("-feature-test-cake-version"));
        assert!(msg.contains("20"));

        let warning = BoundaryWarning::EmptyBranch {
            branch: "feature/".to_string(),
        };
        assert!(warning.to_string().contains("empty after trimming"));
    }
}
