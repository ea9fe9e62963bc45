use super::*;
use crate::net::types::AstFeatures;

fn analysis(complexity_match: Option<f64>) -> AnalysisFeedback {
    AnalysisFeedback {
        complexity_match,
        estimated_time_complexity: Some("O(n^2)".to_owned()),
        optimal_time_complexity: Some("O(n)".to_owned()),
        ast_features: Some(AstFeatures {
            loops: 2,
            nested_loops: true,
            ..AstFeatures::default()
        }),
        ..AnalysisFeedback::default()
    }
}

// =============================================================
// context resolution
// =============================================================

#[test]
fn embedded_analysis_needs_no_fetch() {
    let ctx = SubmissionContext {
        analysis: Some(analysis(Some(0.5))),
        // Even with an id present, embedded data wins.
        submission_id: Some(42),
        ..SubmissionContext::default()
    };
    assert!(matches!(resolve(&ctx), Resolution::UseEmbedded(_)));
}

#[test]
fn submission_id_alone_resolves_to_fetch() {
    let ctx = SubmissionContext {
        submission_id: Some(42),
        ..SubmissionContext::default()
    };
    assert_eq!(resolve(&ctx), Resolution::FetchById(42));
}

#[test]
fn empty_context_is_terminal() {
    let ctx = SubmissionContext::default();
    assert_eq!(resolve(&ctx), Resolution::NoSubmission);
}

#[test]
fn default_context_test_counts_are_zero() {
    let ctx = SubmissionContext::default();
    assert_eq!(ctx.passed_tests, 0);
    assert_eq!(ctx.total_tests, 0);
    assert!(!ctx.all_tests_passed);
}

// =============================================================
// test-result rendering contract
// =============================================================

#[test]
fn renderable_results_keeps_every_entry_including_hidden() {
    use crate::net::types::TestCaseResult;

    let case = |id: i64, hidden: bool| TestCaseResult {
        test_case_id: id,
        status: "failed".to_owned(),
        input: serde_json::json!({"nums": [1, 2]}),
        expected_output: serde_json::json!(3),
        actual_output: serde_json::json!(0),
        error_message: Some("wrong answer".to_owned()),
        is_hidden: hidden,
    };
    let ctx = SubmissionContext {
        test_results: vec![case(0, false), case(1, true), case(2, true)],
        ..SubmissionContext::default()
    };

    let rendered = renderable_results(&ctx);
    assert_eq!(rendered.len(), 3);
    assert!(rendered[1].is_hidden);
    assert_eq!(rendered[2].test_case_id, 2);
}

// =============================================================
// score derivation
// =============================================================

#[test]
fn score_scales_ratio_to_percent() {
    assert_eq!(score(&analysis(Some(0.73))), Some(73));
    assert_eq!(score(&analysis(Some(1.0))), Some(100));
    assert_eq!(score(&analysis(Some(0.0))), Some(0));
}

#[test]
fn score_rounds_to_nearest_percent() {
    assert_eq!(score(&analysis(Some(0.678))), Some(68));
    assert_eq!(score(&analysis(Some(0.672))), Some(67));
}

#[test]
fn missing_ratio_yields_no_score() {
    assert_eq!(score(&analysis(None)), None);
}
