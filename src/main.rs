use lockfile_diff::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use lockfile_diff::adapters::outbound::git::GitSnapshotSource;
use lockfile_diff::application::factories::{FormatterFactory, ParserFactory};
use lockfile_diff::application::use_cases::SummarizeDiffUseCase;
use lockfile_diff::cli::Args;
use lockfile_diff::config::DiffConfig;
use lockfile_diff::ports::outbound::{OutputPresenter, ProgressReporter};
use lockfile_diff::shared::error::{DiffError, ExitCode};
use lockfile_diff::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_dir)?;

    let config = DiffConfig::new(
        project_dir,
        args.format,
        args.verbose,
        &args.rewrites,
        args.revisions,
    )?;

    // Create adapters (Dependency Injection)
    let snapshot_source = GitSnapshotSource::new(config.project_dir.clone());
    let parser = ParserFactory::create(config.format);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = SummarizeDiffUseCase::new(snapshot_source, parser, progress_reporter);
    let response = use_case.execute(config.request())?;

    // Render and present
    let formatter = FormatterFactory::create(config.mode);
    let report = formatter.format(&response.change_set, &config.link_policy);

    let reporter = StderrProgressReporter::new();
    for warning in &report.warnings {
        reporter.report_error(warning);
    }

    StdoutPresenter::new().present(&report.output)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DiffError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DiffError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
