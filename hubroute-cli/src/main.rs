//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use hubroute_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = hubroute_cli::init_logging() {
        eprintln!("hubroute: logging disabled: {err}");
    }
    match hubroute_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("hubroute: {err}");
            std::process::exit(1);
        }
    }
}
