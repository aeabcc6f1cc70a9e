use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::application::dto::LockfileFormat;

const AFTER_HELP: &str = "\
'FROM' and 'TO' can be any git tree-ish, like 'master' or 'HEAD~3'.

If 'TO' is not specified, the current lockfile contents are used.

If 'FROM' is not specified:
  'HEAD' is used if the lockfile has uncommitted modifications, otherwise
  'HEAD~' is used (effectively comparing 'HEAD~' to 'HEAD').";

/// Summarize changes to glide.lock or Gopkg.lock between two git revisions
#[derive(Parser, Debug)]
#[command(name = "lockfile-diff")]
#[command(version)]
#[command(
    about = "Summarize dependency changes in glide.lock or Gopkg.lock across git history",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Print a detailed summary of added, removed and changed dependencies
    #[arg(short, long)]
    pub verbose: bool,

    /// Lockfile format: glide or dep (detected from the project directory if omitted)
    #[arg(short, long)]
    pub format: Option<LockfileFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Extra comparison-link rewrite, checked before the built-in ones.
    /// Can be specified multiple times: --rewrite "go.example.com=github.com/example"
    #[arg(long = "rewrite", value_name = "PREFIX=TARGET")]
    pub rewrites: Vec<String>,

    /// Revisions to compare: [FROM [TO]]
    #[arg(value_name = "REVISION")]
    pub revisions: Vec<String>,
}

impl Args {
    /// Parses arguments, exiting with usage on stderr for more than two revisions
    pub fn parse_args() -> Self {
        let args = Self::parse();
        if args.revisions.len() > 2 {
            Self::command()
                .error(
                    ErrorKind::TooManyValues,
                    format!(
                        "expected at most 2 revisions ([FROM [TO]]), got {}",
                        args.revisions.len()
                    ),
                )
                .exit();
        }
        args
    }
}
