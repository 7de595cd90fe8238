//! Error types emitted by the Dietwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dietwise_core::CatalogError;
use thiserror::Error;

/// Errors emitted by the Dietwise CLI.
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
        /// Name of the affected option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the affected option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the affected option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the affected option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {field} at {path:?}: {source}")]
    ReadSource {
        /// Name of the affected option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// An input file is not valid JSON for its type.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseSource {
        /// Name of the affected option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog contains duplicate or empty ids.
    #[error("catalog at {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Path that triggered the error.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: CatalogError,
    },
    /// The catalog lint reported findings.
    #[error("catalog lint reported {count} finding(s)")]
    LintFindings {
        /// Number of lint findings.
        count: usize,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
