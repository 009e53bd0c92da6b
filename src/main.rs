//! charmscan CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use charmscan::analysis::analyze;
use charmscan::cli::{AnalyzeArgs, Cli, Commands};
use charmscan::config::ProjectConfig;
use charmscan::report::{render, OutputFormat};
use charmscan::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("charmscan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("charmscan=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ProjectConfig::load(path)?,
        None => ProjectConfig::default(),
    };

    let ignore = &mut config.analysis.ignore;
    ignore.attributes.extend(args.ignore_attribute.clone());
    ignore.linters.extend(args.ignore_linter.clone());
    config.validate()?;

    let format: OutputFormat = args
        .format
        .parse()
        .map_err(|message| charmscan::CharmscanError::ConfigValidationError { message })?;

    let results = analyze(&config.analysis, &args.path);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&results, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("charmscan starting with args: {:?}", cli);

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
