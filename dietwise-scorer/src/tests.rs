//! Unit coverage for the default recommendation pipeline.
#![forbid(unsafe_code)]

use dietwise_core::test_support::sample_catalog;
use dietwise_core::{
    Goal, Lang, RecommendationRequest, RecommendationResult, StatedGoal, UserProfile,
};
use rstest::rstest;

use crate::recommend;

fn ids(result: &RecommendationResult) -> Vec<&str> {
    result.iter().map(|diet| diet.diet_id.as_str()).collect()
}

#[rstest]
fn obese_user_gets_weight_focused_diets() {
    let request =
        RecommendationRequest::new(UserProfile::new(90.0, 170.0, 75.0)).with_lang(Lang::En);
    let result = recommend(&request, &sample_catalog());

    assert_eq!(
        ids(&result),
        ["low-carb", "intermittent-fasting", "keto", "vegan", "mediterranean"]
    );
    let top = result.top_pick.as_ref().expect("top pick");
    assert_eq!(top.score, 105);
    assert_eq!(top.match_percentage, 100);
    assert_eq!(
        top.reasons,
        ["Matches your weight loss goal", "Recommended for your weight"]
    );
}

#[rstest]
fn premium_diets_are_ranked() {
    let request = RecommendationRequest::new(UserProfile::new(90.0, 170.0, 75.0))
        .with_max_results(6);
    let result = recommend(&request, &sample_catalog());
    let keto = result
        .iter()
        .find(|diet| diet.diet_id == "keto")
        .expect("keto is ranked");
    assert!(keto.is_premium);
    assert_eq!(keto.score, 90);
    assert_eq!(keto.match_percentage, 90);
    assert_eq!(result.len(), 6);
}

#[rstest]
fn maintaining_user_gets_balanced_diets() {
    let request = RecommendationRequest::new(UserProfile::new(70.0, 170.0, 70.0));
    let result = recommend(&request, &sample_catalog());

    assert_eq!(result.profile.inferred_goal(), Goal::Maintain);
    assert_eq!(
        ids(&result),
        ["mediterranean", "vegan", "low-carb", "intermittent-fasting", "keto"]
    );
    let top = result.top_pick.as_ref().expect("top pick");
    assert_eq!(top.score, 95);
    assert_eq!(top.reasons, ["Başlaması kolay", "Ücretsiz erişim"]);
}

#[rstest]
fn ties_keep_catalog_order() {
    let profile = UserProfile::new(75.0, 180.0, 75.0).with_stated_goal(StatedGoal::BuildMuscle);
    let request = RecommendationRequest::new(profile).with_max_results(6);
    let result = recommend(&request, &sample_catalog());

    assert_eq!(
        ids(&result),
        [
            "high-protein",
            "mediterranean",
            "low-carb",
            "intermittent-fasting",
            "vegan",
            "keto",
        ]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
fn small_bounds_are_honoured(#[case] max_results: usize) {
    let request =
        RecommendationRequest::new(UserProfile::default()).with_max_results(max_results);
    let result = recommend(&request, &sample_catalog());
    assert_eq!(result.len(), max_results);
    assert!(result.alternatives.is_empty());
}

#[rstest]
fn empty_catalog_yields_nothing() {
    let request = RecommendationRequest::new(UserProfile::default());
    let result = recommend(&request, &[]);
    assert!(result.top_pick.is_none());
    assert!(result.alternatives.is_empty());
}
