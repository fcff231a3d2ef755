//! Command-line interface for quoting hubroute delivery costs.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod logging;
mod quote;

pub use error::CliError;
pub use logging::{DEFAULT_FILTER, LoggingError, env_filter, init_logging};

const ARG_QUOTE_ORDER: &str = "order";
const ARG_QUOTE_NETWORK: &str = "network";
const ARG_QUOTE_MAX_CENTERS: &str = "max-centers";
const ENV_QUOTE_ORDER: &str = "HUBROUTE_CMDS_QUOTE_ORDER_PATH";

/// Run the hubroute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or planning
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Quote(args) => quote::run_quote(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hubroute",
    about = "Minimum-cost delivery quotes for multi-warehouse orders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quote the cheapest route that brings an order to the hub.
    Quote(quote::QuoteArgs),
}

#[cfg(test)]
mod tests;
