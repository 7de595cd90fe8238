//! Lint command implementation for the Dietwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dietwise_scorer::{LintFinding, lint_catalog};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{load_catalog, require_existing, write_json};
use crate::{ARG_CATALOG, CliError, ENV_LINT_CATALOG};

/// CLI arguments for the `lint` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "lint",
    long_about = "Check a JSON diet catalog for missing or disagreeing \
                 suitable goals, missing translations, and macro splits that \
                 do not add up to 100. Findings are printed as JSON and the \
                 command fails when there are any.",
    about = "Check a diet catalog for authoring problems"
)]
#[ortho_config(prefix = "DIETWISE")]
pub(crate) struct LintArgs {
    /// Path to the JSON diet catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl LintArgs {
    pub(crate) fn into_config(self) -> Result<LintConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LintConfig::try_from(merged)
    }
}

/// Resolved `lint` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LintConfig {
    /// Path to the JSON catalog file.
    pub(crate) catalog: Utf8PathBuf,
}

impl TryFrom<LintArgs> for LintConfig {
    type Error = CliError;

    fn try_from(args: LintArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_LINT_CATALOG,
        })?;
        Ok(Self { catalog })
    }
}

pub(super) fn run_lint(args: LintArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_lint_with(args, &mut stdout)
}

/// Print findings as JSON, failing afterwards when there are any.
pub(super) fn run_lint_with(args: LintArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let findings = execute_lint(&config)?;
    write_json(writer, &findings)?;
    if findings.is_empty() {
        Ok(())
    } else {
        Err(CliError::LintFindings {
            count: findings.len(),
        })
    }
}

pub(crate) fn execute_lint(config: &LintConfig) -> Result<Vec<LintFinding>, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let findings = lint_catalog(catalog.as_slice());
    for finding in &findings {
        log::warn!("{finding}");
    }
    Ok(findings)
}
