//! Command-line interface for the Dietwise recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod lint;
mod recommend;
mod sources;

pub use error::CliError;

use lint::{LintArgs, run_lint};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_MAX_RESULTS: &str = "max-results";
pub(crate) const ARG_LANG: &str = "lang";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "DIETWISE_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "DIETWISE_CMDS_RECOMMEND_CATALOG";
pub(crate) const ENV_LINT_CATALOG: &str = "DIETWISE_CMDS_LINT_CATALOG";

/// Run the Dietwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration, input
/// loading, or output fails, or when the lint reports findings.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Lint(args) => run_lint(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dietwise",
    about = "Rank diet plans for a user profile and review diet catalogs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend diets for a JSON-encoded request.
    Recommend(RecommendArgs),
    /// Check a diet catalog for authoring problems.
    Lint(LintArgs),
}

#[cfg(test)]
mod tests;
