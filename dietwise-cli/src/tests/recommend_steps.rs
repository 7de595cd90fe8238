//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{Workspace, obese_request, write_utf8};
use super::*;
use crate::recommend::run_recommend_with;
use dietwise_core::test_support::sample_catalog;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct RecommendWorld {
    workspace: Workspace,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "dietwise".to_owned(),
            "recommend".to_owned(),
            self.workspace.path("request.json").into_string(),
            format!("--{ARG_CATALOG}"),
            self.workspace.path("catalog.json").into_string(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn output(&self) -> serde_json::Value {
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a request for a user losing weight exists on disk")]
fn request_exists(#[from(world)] world: &RecommendWorld) {
    world.workspace.write_request(&obese_request());
}

#[given("the request contains invalid JSON")]
fn request_is_invalid(#[from(world)] world: &RecommendWorld) {
    write_utf8(&world.workspace.path("request.json"), b"{ not valid json");
}

#[given("the sample catalog exists on disk")]
fn sample_catalog_exists(#[from(world)] world: &RecommendWorld) {
    world.workspace.write_catalog(&sample_catalog());
}

#[given("I pass --max-results 2")]
fn pass_max_results(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_MAX_RESULTS}"), "2".to_owned()]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let parsed = Cli::try_parse_from(world.build_command_line()).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
        Command::Lint(_) => panic!("expected recommend command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds with low-carb as the top pick")]
fn command_succeeds(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");
    let output = world.output();
    assert_eq!(output["top_pick"]["diet_id"], "low-carb");
    assert_eq!(output["top_pick"]["match_percentage"], 100);
    assert_eq!(
        output["top_pick"]["reasons"],
        serde_json::json!(["Matches your weight loss goal", "Recommended for your weight"])
    );
}

#[then("the output lists {count:usize} alternatives")]
fn output_lists_alternatives(#[from(world)] world: &RecommendWorld, count: usize) {
    let output = world.output();
    let alternatives = output["alternatives"]
        .as_array()
        .expect("alternatives array");
    assert_eq!(alternatives.len(), count);
}

#[then("the command fails because the catalog does not exist")]
fn command_fails_missing_catalog(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::ParseSource { field, .. } => assert_eq!(*field, ARG_REQUEST),
        other => panic!("expected ParseSource, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "recommending diets from JSON");
register_recommend_scenario!(recommend_max_results, "overriding the result bound");
register_recommend_scenario!(recommend_missing_catalog, "rejecting a missing catalog");
register_recommend_scenario!(recommend_invalid_json, "rejecting invalid request JSON");
