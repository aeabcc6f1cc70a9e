use std::path::Path;

/// Supported lockfile formats
///
/// Each format has exactly one fixed lockfile name; the parser for it is
/// chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileFormat {
    /// glide's `glide.lock` (YAML)
    Glide,
    /// dep's `Gopkg.lock` (TOML)
    Dep,
}

impl LockfileFormat {
    /// Detection order when no format is given explicitly
    pub const ALL: [LockfileFormat; 2] = [LockfileFormat::Glide, LockfileFormat::Dep];

    pub fn lockfile_name(&self) -> &'static str {
        match self {
            LockfileFormat::Glide => "glide.lock",
            LockfileFormat::Dep => "Gopkg.lock",
        }
    }

    /// Finds the first supported lockfile present in `project_dir`
    pub fn detect(project_dir: &Path) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| project_dir.join(format.lockfile_name()).is_file())
    }
}

impl std::str::FromStr for LockfileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "glide" | "glide.lock" => Ok(LockfileFormat::Glide),
            "dep" | "gopkg.lock" => Ok(LockfileFormat::Dep),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'glide' or 'dep'",
                s
            )),
        }
    }
}

impl std::fmt::Display for LockfileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockfileFormat::Glide => write!(f, "glide"),
            LockfileFormat::Dep => write!(f, "dep"),
        }
    }
}
