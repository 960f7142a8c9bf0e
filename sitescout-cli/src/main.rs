//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use sitescout_cli::CliError;

fn main() {
    if let Err(err) = sitescout_cli::init_logging() {
        eprintln!("sitescout: {err}");
    }
    match sitescout_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("sitescout: {err}");
            std::process::exit(1);
        }
    }
}
