use anyhow::{bail, Result};
use clap::Parser;
use tracing::warn;

use branch_version::config::{self, Config};
use branch_version::domain::{prerelease, Version};
use branch_version::ui::{self, Explanation};
use branch_version::{
    legacy_version, legacy_warnings, semver2_version, semver2_warnings, semver2_with_suffix,
    version_with_suffix, VersionSettings, VersionSettingsSemVer2, VersioningError,
};

#[derive(clap::Parser, Debug)]
#[command(
    name = "branch-version",
    about = "Build package version strings from branch names",
    version
)]
struct Args {
    #[arg(value_name = "VERSION", help = "Numeric version: major.minor.patch[.build]")]
    base_version: String,

    #[arg(short, long, help = "Branch name, e.g. refs/heads/feature/login")]
    branch: Option<String>,

    #[arg(long, help = "Commit hash added to SemVer 2.0.0 versions")]
    hash: Option<String>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Branch change number for SemVer 2.0.0 versions"
    )]
    change_number: Option<i64>,

    #[arg(long, help = "Use SemVer 2.0.0 separators (- for pre-release, + for metadata)")]
    semver2: bool,

    #[arg(short, long, help = "Literal text removed from the branch name (repeatable)")]
    trim: Vec<String>,

    #[arg(long, help = "Regex marking a branch as final (repeatable, replaces config)")]
    filter: Vec<String>,

    #[arg(
        long,
        conflicts_with = "filter",
        help = "Treat every branch as pre-release"
    )]
    no_filters: bool,

    #[arg(long, help = "Keep refs/heads/, refs/tags/ and refs/remotes/ in the branch")]
    keep_git_refs: bool,

    #[arg(long, help = "Prefix for branch labels without letters [default: b-]")]
    prefix: Option<String>,

    #[arg(long, help = "Always apply the branch prefix")]
    always_prefix: bool,

    #[arg(
        long,
        conflicts_with = "branch",
        help = "Use this suffix instead of a branch name"
    )]
    suffix: Option<String>,

    #[arg(
        long,
        requires = "suffix",
        help = "With --suffix --semver2: mark the suffix as build metadata (+)"
    )]
    metadata: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print how the version was derived to stderr")]
    explain: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    branch_version::logging::init(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match run(&args, &config) {
        Ok(version) => println!("{}", version),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<String> {
    let base = Version::parse(&args.base_version)?;
    let semver2 = args.semver2 || config.behavior.semver2;

    if semver2 && base.build.is_some() {
        bail!(
            "SemVer 2.0.0 versions have three components, got '{}'",
            args.base_version
        );
    }

    if !semver2 && (args.hash.is_some() || args.change_number.is_some()) {
        warn!("--hash and --change-number only apply to SemVer 2.0.0 versions");
    }

    if let Some(suffix) = &args.suffix {
        let version = if semver2 {
            semver2_with_suffix(base.major, base.minor, base.patch, suffix, !args.metadata)
        } else {
            version_with_suffix(base.major, base.minor, base.patch, base.build, suffix)
        };
        return Ok(version);
    }

    let branch = args
        .branch
        .clone()
        .ok_or(VersioningError::MissingBranchName)?;
    let settings = apply_overrides(config.legacy_settings(branch), args);

    let version = if semver2 {
        let settings = VersionSettingsSemVer2 {
            base: settings.clone(),
            hash: args.hash.clone(),
            branch_change_number: args.change_number,
        };
        ui::display_boundary_warnings(&semver2_warnings(&settings)?);
        semver2_version(base.major, base.minor, base.patch, &settings)?
    } else {
        ui::display_boundary_warnings(&legacy_warnings(&settings)?);
        legacy_version(base.major, base.minor, base.patch, base.build, &settings)?
    };

    if args.explain {
        explain(&settings, &version)?;
    }

    Ok(version)
}

/// Command line flags take precedence over the config file. Trim patterns
/// from both sources are applied, config first.
fn apply_overrides(mut settings: VersionSettings, args: &Args) -> VersionSettings {
    if args.no_filters {
        settings.pre_release_filters = None;
    } else if !args.filter.is_empty() {
        settings.pre_release_filters = Some(args.filter.clone());
    }

    if !args.trim.is_empty() {
        settings
            .trim_patterns
            .get_or_insert_with(Vec::new)
            .extend(args.trim.iter().cloned());
    }

    if args.keep_git_refs {
        settings.filter_git_references = false;
    }

    if let Some(prefix) = &args.prefix {
        settings.branch_prefix = prefix.clone();
    }

    if args.always_prefix {
        settings.always_apply_branch_prefix = true;
    }

    settings
}

fn explain(settings: &VersionSettings, version: &str) -> Result<()> {
    let branch = settings.branch_name()?;
    let trimmed = settings.trimmed_branch()?;
    let kind = prerelease::classify(&trimmed, settings.pre_release_filters.as_deref())?;

    ui::display_explanation(&Explanation {
        branch,
        trimmed: &trimmed,
        kind,
        version,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["branch-version"];
        argv.extend_from_slice(args);
        Args::parse_from(argv)
    }

    #[test]
    fn test_run_legacy() {
        let args = parse(&["1.0.0", "--branch", "refs/heads/feature/test_cake_version"]);
        assert_eq!(
            run(&args, &Config::default()).unwrap(),
            "1.0.0-feature-test-cake-v"
        );
    }

    #[test]
    fn test_run_semver2() {
        let args = parse(&[
            "1.0.0",
            "--semver2",
            "--branch",
            "refs/heads/feature/test_cake_version",
            "--hash",
            "abcdabcd",
            "--change-number",
            "132",
            "--trim",
            "feature/",
        ]);
        assert_eq!(
            run(&args, &Config::default()).unwrap(),
            "1.0.0-test-cake-version.132.abcdabcd"
        );
    }

    #[test]
    fn test_run_semver2_from_config() {
        let mut config = Config::default();
        config.behavior.semver2 = true;
        let args = parse(&["1.0.0", "--branch", "master", "--hash", "abcdabcd"]);
        assert_eq!(run(&args, &config).unwrap(), "1.0.0+abcdabcd");
    }

    #[test]
    fn test_run_semver2_rejects_build_component() {
        let args = parse(&["1.0.0.1", "--semver2", "--branch", "develop"]);
        assert!(run(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_run_requires_branch_or_suffix() {
        let args = parse(&["1.0.0"]);
        let err = run(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Branch name is required"));
    }

    #[test]
    fn test_run_explicit_suffix() {
        let args = parse(&["1.0.0.2", "--suffix", "nightly_build"]);
        assert_eq!(
            run(&args, &Config::default()).unwrap(),
            "1.0.0.2-nightly-build"
        );

        let args = parse(&["1.0.0", "--semver2", "--suffix", "sha.abcd", "--metadata"]);
        assert_eq!(run(&args, &Config::default()).unwrap(), "1.0.0+sha.abcd");
    }

    #[test]
    fn test_overrides_replace_filters() {
        let args = parse(&["1.0.0", "--filter", "^main$"]);
        let settings = apply_overrides(VersionSettings::new("main"), &args);
        assert_eq!(settings.pre_release_filters, Some(vec!["^main$".to_string()]));

        let args = parse(&["1.0.0", "--no-filters"]);
        let settings = apply_overrides(VersionSettings::new("main"), &args);
        assert_eq!(settings.pre_release_filters, None);
    }

    #[test]
    fn test_overrides_append_trims_after_config() {
        let mut config = Config::default();
        config.filters.trim_patterns = vec!["feature/".to_string()];
        let args = parse(&["1.0.0", "-t", "bugfix/"]);
        let settings = apply_overrides(config.legacy_settings("x"), &args);
        assert_eq!(
            settings.trim_patterns,
            Some(vec!["feature/".to_string(), "bugfix/".to_string()])
        );
    }

    #[test]
    fn test_overrides_prefix_and_refs() {
        let args = parse(&["1.0.0", "--prefix", "br-", "--always-prefix", "--keep-git-refs"]);
        let settings = apply_overrides(VersionSettings::new("x"), &args);
        assert_eq!(settings.branch_prefix, "br-");
        assert!(settings.always_apply_branch_prefix);
        assert!(!settings.filter_git_references);
    }
}
