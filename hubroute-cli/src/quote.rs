//! Quote command implementation for the hubroute CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hubroute_core::{Network, Order, Planner, Quote};
use hubroute_search::{DEFAULT_MAX_REQUIRED_CENTERS, ExhaustiveSearch, SearchConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_QUOTE_MAX_CENTERS, ARG_QUOTE_NETWORK, ARG_QUOTE_ORDER, CliError, ENV_QUOTE_ORDER};

/// Three-warehouse network used when no `--network` is given.
pub(crate) const BUNDLED_NETWORK: &str = include_str!("default_network.json");

/// CLI arguments for the `quote` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Quote the minimum delivery cost for an order. The order is \
                 a JSON object mapping product keys to quantities. The \
                 network defaults to the bundled three-warehouse topology.",
    about = "Quote the minimum delivery cost for an order"
)]
#[ortho_config(prefix = "HUBROUTE")]
pub(crate) struct QuoteArgs {
    /// Path to a JSON file containing the order.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) order_path: Option<Utf8PathBuf>,
    /// Path to a JSON network definition.
    #[arg(long = ARG_QUOTE_NETWORK, value_name = "path")]
    #[serde(default)]
    pub(crate) network: Option<Utf8PathBuf>,
    /// Largest number of warehouses one order may require.
    #[arg(long = ARG_QUOTE_MAX_CENTERS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_centers: Option<usize>,
}

impl QuoteArgs {
    pub(crate) fn into_config(self) -> Result<QuoteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QuoteConfig::try_from(merged)
    }
}

/// Where the delivery network comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NetworkSource {
    /// The network compiled into the binary.
    Bundled,
    /// A JSON file on disk.
    File(Utf8PathBuf),
}

/// Resolved `quote` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuoteConfig {
    /// Path to the JSON order file.
    pub(crate) order_path: Utf8PathBuf,
    /// Network definition.
    pub(crate) network: NetworkSource,
    /// Upper bound on required warehouses.
    pub(crate) max_centers: usize,
}

impl QuoteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.order_path, ARG_QUOTE_ORDER)?;
        if let NetworkSource::File(path) = &self.network {
            Self::require_existing(path, ARG_QUOTE_NETWORK)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<QuoteArgs> for QuoteConfig {
    type Error = CliError;

    fn try_from(args: QuoteArgs) -> Result<Self, Self::Error> {
        let order_path = args.order_path.ok_or(CliError::MissingArgument {
            field: ARG_QUOTE_ORDER,
            env: ENV_QUOTE_ORDER,
        })?;
        let network = args
            .network
            .map_or(NetworkSource::Bundled, NetworkSource::File);
        let max_centers = args.max_centers.unwrap_or(DEFAULT_MAX_REQUIRED_CENTERS);
        Ok(Self {
            order_path,
            network,
            max_centers,
        })
    }
}

/// Builds a planner for the current quote invocation.
pub(crate) trait PlannerBuilder {
    fn build(&self, network: Network, config: &QuoteConfig) -> Result<Box<dyn Planner>, CliError>;
}

pub(crate) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, network: Network, config: &QuoteConfig) -> Result<Box<dyn Planner>, CliError> {
        let search = SearchConfig {
            max_required_centers: config.max_centers,
        };
        Ok(Box::new(ExhaustiveSearch::with_config(network, search)))
    }
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_quote_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(crate) fn run_quote_with(
    args: QuoteArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let quote = execute_quote(args, builder)?;
    write_quote(writer, &quote)
}

fn execute_quote(args: QuoteArgs, builder: &dyn PlannerBuilder) -> Result<Quote, CliError> {
    let config = resolve_quote_config(args)?;
    let order = load_order(&config.order_path)?;
    let network = load_network(&config.network)?;
    let planner = builder.build(network, &config)?;
    let plan = planner.plan(&order)?;
    log::info!(
        "quoted {:.3} over {} required centers in {:?} ({} candidates)",
        plan.cost,
        plan.required.len(),
        plan.diagnostics.solve_time,
        plan.diagnostics.candidates_evaluated
    );
    Ok(Quote::from(&plan))
}

fn resolve_quote_config(args: QuoteArgs) -> Result<QuoteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    log::debug!("resolved quote configuration: {config:?}");
    Ok(config)
}

/// Loads a JSON-encoded [`Order`] from disk.
pub(crate) fn load_order(path: &Utf8Path) -> Result<Order, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOrder {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseOrder {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and validates the delivery network.
pub(crate) fn load_network(source: &NetworkSource) -> Result<Network, CliError> {
    match source {
        NetworkSource::Bundled => {
            serde_json::from_str(BUNDLED_NETWORK).map_err(CliError::BundledNetwork)
        }
        NetworkSource::File(path) => {
            let file = open_utf8_file(path).map_err(|source| CliError::OpenNetwork {
                path: path.clone(),
                source,
            })?;
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                CliError::ParseNetwork {
                    path: path.clone(),
                    source,
                }
            })
        }
    }
}

fn write_quote(writer: &mut dyn Write, quote: &Quote) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(quote).map_err(CliError::SerialiseQuote)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteQuote)?;
    writer.write_all(b"\n").map_err(CliError::WriteQuote)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QuoteConfig, CliError> {
    let merged = QuoteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QuoteConfig::try_from(merged)
}
