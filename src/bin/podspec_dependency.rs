//! podspec-dependency - set a dependency constraint in a podspec
//!
//! ```text
//! podspec-dependency HeapSwiftCoreInterfaces '~> 0.3'
//! ```

use clap::Parser;
use libver::cli::DependencyArgs;
use libver::logging;
use libver::orchestrator::run_dependency_command;
use libver::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DependencyArgs::parse();
    logging::init(args.common.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: DependencyArgs) -> anyhow::Result<()> {
    let report = run_dependency_command(&args)?;

    let formatter = create_formatter(OutputConfig::from_cli(args.common.json, args.common.no_color));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
