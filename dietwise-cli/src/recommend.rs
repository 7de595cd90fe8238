//! Recommend command implementation for the Dietwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dietwise_core::{Lang, RecommendationRequest, RecommendationResult};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{load_catalog, load_json, require_existing, write_json};
use crate::{
    ARG_CATALOG, ARG_LANG, ARG_MAX_RESULTS, ARG_REQUEST, CliError, ENV_RECOMMEND_CATALOG,
    ENV_RECOMMEND_REQUEST,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Score every diet in a JSON catalog against the profile in a \
                 JSON-encoded RecommendationRequest and print the top pick and \
                 alternatives as JSON. Flags override the matching request \
                 fields.",
    about = "Recommend diets for a user profile"
)]
#[ortho_config(prefix = "DIETWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a RecommendationRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the JSON diet catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Override the number of diets returned, including the top pick.
    #[arg(long = ARG_MAX_RESULTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
    /// Override the output language (`tr` or `en`).
    #[arg(long = ARG_LANG, value_name = "lang")]
    #[serde(default)]
    pub(crate) lang: Option<Lang>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON catalog file.
    pub(crate) catalog: Utf8PathBuf,
    /// Result bound overriding the request's.
    pub(crate) max_results: Option<usize>,
    /// Language overriding the request's.
    pub(crate) lang: Option<Lang>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }

    /// Apply flag overrides on top of the decoded request.
    pub(crate) fn apply_overrides(
        &self,
        mut request: RecommendationRequest,
    ) -> RecommendationRequest {
        if let Some(max_results) = self.max_results {
            request.max_results = max_results;
        }
        if let Some(lang) = self.lang {
            request.lang = lang;
        }
        request
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        Ok(Self {
            request_path,
            catalog,
            max_results: args.max_results,
            lang: args.lang,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let result = execute_recommend(&config)?;
    write_json(writer, &result)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
) -> Result<RecommendationResult, CliError> {
    let request: RecommendationRequest = load_json(&config.request_path, ARG_REQUEST)?;
    let request = config.apply_overrides(request);
    let catalog = load_catalog(&config.catalog)?;
    Ok(dietwise_scorer::recommend(&request, catalog.as_slice()))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
