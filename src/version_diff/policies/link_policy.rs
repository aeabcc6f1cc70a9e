use crate::version_diff::domain::Update;

/// Host prefix a rewritten import path must carry to get a comparison link
pub const CANONICAL_HOST_PREFIX: &str = "github.com/";

/// Import-path prefixes served from a different repository host
const DEFAULT_REWRITES: &[(&str, &str)] = &[
    ("golang.org/x", "github.com/golang"),
    ("google.golang.org/appengine", "github.com/golang/appengine"),
    ("google.golang.org/grpc", "github.com/grpc/grpc-go"),
    ("gopkg.in/inf.v0", "github.com/go-inf/inf"),
    ("gopkg.in/yaml.v2", "github.com/go-yaml/yaml"),
    ("honnef.co/go/", "github.com/dominikh/go-"),
    (
        "cloud.google.com/go",
        "github.com/GoogleCloudPlatform/google-cloud-go",
    ),
    ("google.golang.org/api", "github.com/google/google-api-go-client"),
];

/// A single `prefix -> replacement` rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRewrite {
    prefix: String,
    replacement: String,
}

impl PrefixRewrite {
    pub fn new(prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            replacement: replacement.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    fn apply(&self, name: &str) -> Option<String> {
        name.strip_prefix(self.prefix.as_str())
            .map(|rest| format!("{}{}", self.replacement, rest))
    }
}

/// LinkPolicy for deriving comparison links from dependency names
///
/// Rules are tried in order and the first matching prefix is rewritten
/// once. Immutable after construction, so one value can be shared by
/// every formatter in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPolicy {
    rewrites: Vec<PrefixRewrite>,
}

impl LinkPolicy {
    /// Policy with no rewrites: only `github.com/...` names get links.
    pub fn empty() -> Self {
        Self {
            rewrites: Vec::new(),
        }
    }

    pub fn new(rewrites: Vec<PrefixRewrite>) -> Self {
        Self { rewrites }
    }

    /// Returns a policy whose `overrides` are consulted before the current rules.
    pub fn with_overrides(self, overrides: Vec<PrefixRewrite>) -> Self {
        let mut rewrites = overrides;
        rewrites.extend(self.rewrites);
        Self { rewrites }
    }

    pub fn rewrites(&self) -> &[PrefixRewrite] {
        &self.rewrites
    }

    /// Maps an import path onto its repository path using the first matching rule.
    pub fn repository_path(&self, name: &str) -> String {
        self.rewrites
            .iter()
            .find_map(|rule| rule.apply(name))
            .unwrap_or_else(|| name.to_string())
    }

    /// Builds `https://<repo>/compare/<from>...<to>` for an update
    ///
    /// # Returns
    /// None when the dependency does not resolve to a repository on the canonical host
    pub fn compare_link(&self, update: &Update) -> Option<String> {
        let repository = self.repository_path(update.name());
        if !repository.starts_with(CANONICAL_HOST_PREFIX) {
            return None;
        }
        Some(format!(
            "https://{}/compare/{}...{}",
            repository,
            update.short_from(),
            update.short_to()
        ))
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_REWRITES
                .iter()
                .map(|(prefix, replacement)| PrefixRewrite::new(*prefix, *replacement))
                .collect(),
        )
    }
}
