//! Focused unit tests covering recommend CLI configuration and loading.

use super::helpers::{Workspace, obese_request, write_utf8};
use super::*;
use crate::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, execute_recommend,
};
use camino::Utf8PathBuf;
use dietwise_core::test_support::sample_catalog;
use dietwise_core::{
    DietRecord, Goal, Lang, LocalizedText, RecommendationRequest, UserProfile,
};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config(request_path: Utf8PathBuf, catalog: Utf8PathBuf) -> RecommendConfig {
    RecommendConfig {
        request_path,
        catalog,
        max_results: None,
        lang: None,
    }
}

#[rstest]
#[case(None, Some(Utf8PathBuf::from("catalog.json")), ARG_REQUEST, ENV_RECOMMEND_REQUEST)]
#[case(
    Some(Utf8PathBuf::from("request.json")),
    None,
    ARG_CATALOG,
    ENV_RECOMMEND_CATALOG
)]
fn converting_without_required_fields_errors(
    #[case] request_path: Option<Utf8PathBuf>,
    #[case] catalog: Option<Utf8PathBuf>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RecommendArgs {
        request_path,
        catalog,
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog(workspace: Workspace) {
    let request_path = workspace.write_request(&obese_request());
    let config = config(request_path, workspace.path("missing.json"));
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let catalog = workspace.write_catalog(&sample_catalog());
    match config(request_path, catalog)
        .validate_sources()
        .expect_err("expected failure")
    {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn recommends_from_files(workspace: Workspace) {
    let request_path = workspace.write_request(&obese_request());
    let catalog = workspace.write_catalog(&sample_catalog());

    let result = execute_recommend(&config(request_path, catalog)).expect("recommend");
    let top = result.top_pick.as_ref().expect("top pick");
    assert_eq!(top.diet_id, "low-carb");
    assert_eq!(top.name, "Low Carb Diet");
    assert_eq!(result.alternatives.len(), 4);
}

#[rstest]
fn flags_override_request_fields(workspace: Workspace) {
    let request_path = workspace.write_request(&obese_request());
    let catalog = workspace.write_catalog(&sample_catalog());
    let config = RecommendConfig {
        max_results: Some(2),
        lang: Some(Lang::Tr),
        ..config(request_path, catalog)
    };

    let result = execute_recommend(&config).expect("recommend");
    assert_eq!(result.len(), 2);
    let top = result.top_pick.as_ref().expect("top pick");
    assert_eq!(top.name, "Düşük Karbonhidrat");
    assert_eq!(top.reasons, ["Kilo verme hedefinize uygun", "Kilonuz için önerilen"]);
}

#[rstest]
fn request_defaults_apply_when_fields_are_omitted(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        br#"{"profile": {"weight": 90, "height": 170, "target_weight": 75}}"#,
    );
    let catalog = workspace.write_catalog(&sample_catalog());

    let result = execute_recommend(&config(request_path, catalog)).expect("recommend");
    assert_eq!(result.len(), 5);
    let top = result.top_pick.as_ref().expect("top pick");
    assert_eq!(top.name, "Düşük Karbonhidrat");
}

#[rstest]
fn null_goal_from_user_store_is_accepted(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        br#"{"profile": {"weight": 80, "height": 170, "target_weight": 80, "goal": null}, "lang": "en"}"#,
    );
    let catalog = workspace.write_catalog(&sample_catalog());

    let result = execute_recommend(&config(request_path, catalog)).expect("recommend");
    assert_eq!(result.profile.inferred_goal(), Goal::Maintain);
    assert!(result.top_pick.is_some());
}

#[rstest]
fn invalid_request_json_is_reported(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, b"{ not valid json");
    let catalog = workspace.write_catalog(&sample_catalog());

    match execute_recommend(&config(request_path.clone(), catalog)).expect_err("invalid JSON") {
        CliError::ParseSource { field, path, .. } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected ParseSource, found {other:?}"),
    }
}

#[rstest]
fn duplicate_catalog_ids_are_rejected(workspace: Workspace) {
    let request_path =
        workspace.write_request(&RecommendationRequest::new(UserProfile::default()));
    let twin = DietRecord::new(
        "keto",
        LocalizedText::new("Keto", "Keto"),
        LocalizedText::default(),
    );
    let catalog = workspace.write_catalog(&[twin.clone(), twin]);

    match execute_recommend(&config(request_path, catalog)).expect_err("duplicate ids") {
        CliError::InvalidCatalog { source, .. } => {
            assert!(source.to_string().contains("keto"), "unexpected {source}");
        }
        other => panic!("expected InvalidCatalog, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file/catalog.json",
            "max_results": 3,
            "lang": "tr",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": "from-env/request.json",
        "catalog": "from-env/catalog.json",
    }));
    composer.push_cli(json!({
        "lang": "en",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, Utf8PathBuf::from("from-env/request.json"));
    assert_eq!(config.catalog, Utf8PathBuf::from("from-env/catalog.json"));
    assert_eq!(config.max_results, Some(3));
    assert_eq!(config.lang, Some(Lang::En));
}
