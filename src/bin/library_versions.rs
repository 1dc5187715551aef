//! library-versions - keep podspec and source versions in sync
//!
//! ```text
//! library-versions 0.3.0              # write the version everywhere
//! library-versions --validate         # check that all files agree
//! library-versions --library interfaces --print
//! ```

use clap::Parser;
use libver::cli::VersionArgs;
use libver::logging;
use libver::orchestrator::run_version_command;
use libver::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = VersionArgs::parse();
    logging::init(args.common.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: VersionArgs) -> anyhow::Result<()> {
    let report = run_version_command(&args)?;

    let formatter = create_formatter(OutputConfig::from_cli(args.common.json, args.common.no_color));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
