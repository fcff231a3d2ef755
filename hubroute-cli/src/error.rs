//! Error types emitted by the hubroute CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hubroute_core::PlanError;
use thiserror::Error;

/// Errors emitted by the hubroute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the order file failed.
    #[error("failed to open order at {path:?}: {source}")]
    OpenOrder {
        /// Order file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Order JSON could not be decoded or held invalid quantities.
    #[error("failed to parse order JSON at {path:?}: {source}")]
    ParseOrder {
        /// Order file path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Opening the network file failed.
    #[error("failed to open network at {path:?}: {source}")]
    OpenNetwork {
        /// Network file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Network JSON could not be decoded or failed validation.
    #[error("failed to parse network JSON at {path:?}: {source}")]
    ParseNetwork {
        /// Network file path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: serde_json::Error,
    },
    /// The network compiled into the binary is invalid.
    #[error("bundled network is invalid: {0}")]
    BundledNetwork(#[source] serde_json::Error),
    /// The planner rejected the order.
    #[error("planning failed: {source}")]
    Plan {
        /// Planner failure.
        #[from]
        source: PlanError,
    },
    /// Serialising the quote failed.
    #[error("failed to serialise quote: {0}")]
    SerialiseQuote(#[source] serde_json::Error),
    /// Writing the quote failed.
    #[error("failed to write quote: {0}")]
    WriteQuote(#[source] std::io::Error),
}
