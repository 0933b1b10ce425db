//! iterbench CLI entry point

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use iterbench::{format_report, runner, Cli, IterBenchError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> iterbench::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging()?;
    }

    let timings = runner::run();
    let report = format_report(&timings);

    let mut stdout = std::io::stdout();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Initialize tracing to stderr so stdout only carries the report
fn init_logging() -> iterbench::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("iterbench=debug".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| IterBenchError::LoggerInit {
            message: e.to_string(),
        })
}
