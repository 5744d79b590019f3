use std::process::ExitCode;

use briscola::MatchConfig;
use clap::Parser;

mod bin_support;
mod telemetry;

use bin_support::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    let config = match MatchConfig::from_options(args.into_options()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    match bin_support::session::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), fatal = e.is_fatal(), error = %e, "session failed");
            eprintln!("❌ {e}");
            ExitCode::from(e.exit_status())
        }
    }
}
