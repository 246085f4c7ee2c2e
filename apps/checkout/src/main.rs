use std::process::ExitCode;

use clap::Parser;
use grocer_checkout::{init_tracing, run, Args};
use tracing::{debug, error, trace};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());
    debug!("Log level set to {}", args.log_level().to_string().to_lowercase());
    trace!("{args:?}");

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}
