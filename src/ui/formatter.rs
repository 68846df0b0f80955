//! Pure formatting functions for UI output.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::BranchKind;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print each boundary warning on its own line.
pub fn display_boundary_warnings(warnings: &[BoundaryWarning]) {
    for warning in warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }
}

/// What the pipeline did with a branch, for `--explain`.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation<'a> {
    pub branch: &'a str,
    pub trimmed: &'a str,
    pub kind: BranchKind,
    pub version: &'a str,
}

/// Render an explanation as aligned `label: value` lines.
pub fn format_explanation(explanation: &Explanation<'_>) -> String {
    let trimmed = if explanation.trimmed.is_empty() {
        "(empty)"
    } else {
        explanation.trimmed
    };

    format!(
        "  Branch:  {}\n  Trimmed: {}\n  Kind:    {}\n  Version: {}",
        explanation.branch, trimmed, explanation.kind, explanation.version
    )
}

/// Print an explanation under a bold heading.
pub fn display_explanation(explanation: &Explanation<'_>) {
    eprintln!("{}", style("Version breakdown:").bold());
    eprintln!("{}", format_explanation(explanation));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_explanation() {
        let explanation = Explanation {
            branch: "refs/heads/feature/login",
            trimmed: "feature/login",
            kind: BranchKind::PreRelease,
            version: "1.0.0-feature-login",
        };
        let text = format_explanation(&explanation);
        assert!(text.contains("Branch:  refs/heads/feature/login"));
        assert!(text.contains("Trimmed: feature/login"));
        assert!(text.contains("Kind:    pre-release"));
        assert!(text.contains("Version: 1.0.0-feature-login"));
    }

    #[test]
    fn test_format_explanation_empty_branch() {
        let explanation = Explanation {
            branch: "refs/heads/",
            trimmed: "",
            kind: BranchKind::PreRelease,
            version: "1.0.0-b",
        };
        assert!(format_explanation(&explanation).contains("Trimmed: (empty)"));
    }
}
