//! Run configuration for lockfile-diff.
//!
//! Everything is supplied on the command line; this module turns the
//! parsed arguments into a validated [`DiffConfig`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::application::dto::{DiffRequest, LockfileFormat, ReportMode};
use crate::shared::error::DiffError;
use crate::shared::Result;
use crate::version_diff::policies::{LinkPolicy, PrefixRewrite};

/// Validated settings for one invocation.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub project_dir: PathBuf,
    pub format: LockfileFormat,
    pub mode: ReportMode,
    pub link_policy: LinkPolicy,
    pub revisions: Vec<String>,
}

impl DiffConfig {
    /// Assembles the configuration
    ///
    /// # Arguments
    /// * `project_dir` - Directory holding the lockfile; git runs here
    /// * `format` - Explicit format, or None to detect from `project_dir`
    /// * `verbose` - Selects the summary report instead of links
    /// * `rewrites` - Raw `PREFIX=TARGET` overrides for comparison links
    /// * `revisions` - Positional revisions, passed through unchanged
    pub fn new(
        project_dir: PathBuf,
        format: Option<LockfileFormat>,
        verbose: bool,
        rewrites: &[String],
        revisions: Vec<String>,
    ) -> Result<Self> {
        let format = resolve_format(&project_dir, format)?;
        let overrides = parse_rewrites(rewrites)?;
        warn_duplicate_prefixes(&overrides);

        Ok(Self {
            project_dir,
            format,
            mode: ReportMode::from_verbose(verbose),
            link_policy: LinkPolicy::default().with_overrides(overrides),
            revisions,
        })
    }

    pub fn request(&self) -> DiffRequest {
        DiffRequest::new(self.revisions.clone())
    }
}

/// Uses the explicit format if given, otherwise the first lockfile found.
fn resolve_format(project_dir: &Path, format: Option<LockfileFormat>) -> Result<LockfileFormat> {
    match format {
        Some(format) => Ok(format),
        None => LockfileFormat::detect(project_dir).ok_or_else(|| {
            DiffError::FormatNotDetected {
                path: project_dir.to_path_buf(),
            }
            .into()
        }),
    }
}

/// Parses one `PREFIX=TARGET` rewrite rule.
pub fn parse_rewrite(raw: &str) -> Result<PrefixRewrite> {
    let invalid = |reason: &str| DiffError::Validation {
        message: format!(
            "invalid --rewrite '{}': {}.\n\n💡 Hint: Use PREFIX=TARGET, e.g. go.example.com=github.com/example",
            raw, reason
        ),
    };

    let (prefix, target) = raw
        .split_once('=')
        .ok_or_else(|| invalid("missing '='"))?;
    let (prefix, target) = (prefix.trim(), target.trim());

    if prefix.is_empty() {
        return Err(invalid("prefix must not be empty").into());
    }
    if target.is_empty() {
        return Err(invalid("target must not be empty").into());
    }

    Ok(PrefixRewrite::new(prefix, target))
}

fn parse_rewrites(raw: &[String]) -> Result<Vec<PrefixRewrite>> {
    raw.iter().map(|rule| parse_rewrite(rule)).collect()
}

/// Later rules with an already-seen prefix can never match.
fn warn_duplicate_prefixes(rewrites: &[PrefixRewrite]) {
    let mut seen = HashSet::new();
    for rule in rewrites {
        if !seen.insert(rule.prefix()) {
            eprintln!(
                "⚠️  Warning: --rewrite prefix '{}' is given more than once; only the first one is used.",
                rule.prefix()
            );
        }
    }
}
