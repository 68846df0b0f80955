/// Git reference prefixes removed when reference filtering is enabled
pub const GIT_REFERENCE_PREFIXES: [&str; 3] = ["refs/heads/", "refs/tags/", "refs/remotes/"];

/// Trim a raw branch name down to the part that labels a version.
///
/// Git reference prefixes are removed wherever they occur, then each trim
/// pattern is removed as a literal substring, in order. Trim patterns are
/// never interpreted as regular expressions. Passes repeat until nothing
/// more is removed, so a removal cannot leave a new match behind and
/// trimming an already trimmed name is a no-op.
pub fn trim_branch(
    branch: &str,
    filter_git_references: bool,
    trim_patterns: Option<&[String]>,
) -> String {
    let mut trimmed = branch.to_string();

    loop {
        let before = trimmed.len();

        if filter_git_references {
            for prefix in GIT_REFERENCE_PREFIXES {
                trimmed = trimmed.replace(prefix, "");
            }
        }

        if let Some(patterns) = trim_patterns {
            for pattern in patterns.iter().filter(|p| !p.is_empty()) {
                trimmed = trimmed.replace(pattern.as_str(), "");
            }
        }

        // Every removal shortens the string
        if trimmed.len() == before {
            return trimmed;
        }
    }
}

/// A label without any ASCII letter could be read as a number or build
/// metadata by package tooling, so it needs the branch prefix.
pub fn needs_branch_prefix(branch: &str) -> bool {
    !branch.chars().any(|c| c.is_ascii_alphabetic())
}

/// Prepend `prefix` when the branch needs it or when `always` is set
pub fn apply_branch_prefix(branch: &str, prefix: &str, always: bool) -> String {
    if always || needs_branch_prefix(branch) {
        format!("{}{}", prefix, branch)
    } else {
        branch.to_string()
    }
}
