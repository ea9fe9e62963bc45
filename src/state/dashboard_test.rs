use super::*;

fn problem(id: i64, title: &str) -> Problem {
    Problem {
        id,
        title: title.to_owned(),
        slug: None,
        description: "desc".to_owned(),
        difficulty: "easy".to_owned(),
        tags: vec![],
    }
}

fn submission(id: i64, problem_id: i64, passed: bool) -> Submission {
    Submission {
        id,
        problem_id,
        all_tests_passed: passed,
        test_results: vec![],
    }
}

// =============================================================
// solved_count / progress
// =============================================================

#[test]
fn solved_count_dedups_repeat_passes() {
    // Two passing submissions for the same problem count once.
    let subs = vec![
        submission(1, 7, true),
        submission(2, 7, true),
        submission(3, 9, true),
    ];
    assert_eq!(solved_count(&subs), 2);
}

#[test]
fn solved_count_ignores_failing_submissions() {
    let subs = vec![submission(1, 7, false), submission(2, 8, true)];
    assert_eq!(solved_count(&subs), 1);
}

#[test]
fn solved_count_empty_is_zero() {
    assert_eq!(solved_count(&[]), 0);
}

#[test]
fn progress_rounds_to_nearest_percent() {
    assert_eq!(progress(1, 3), 33);
    assert_eq!(progress(2, 3), 67);
    assert_eq!(progress(3, 3), 100);
}

#[test]
fn progress_with_empty_catalog_is_zero() {
    assert_eq!(progress(0, 0), 0);
}

// =============================================================
// reducer transitions
// =============================================================

#[test]
fn default_state_is_loading_both_sections() {
    let state = DashboardState::default();
    assert!(state.loading_problems);
    assert!(state.loading_recommendation);
    assert!(state.problems.is_empty());
    assert!(state.recommended.is_none());
}

#[test]
fn problems_loaded_computes_progress_and_clears_its_flag_only() {
    let mut state = DashboardState::default();
    let generation = state.begin_load();

    state.apply(DashboardEvent::ProblemsLoaded {
        generation,
        problems: vec![problem(1, "Two Sum"), problem(2, "LRU Cache")],
        submissions: vec![submission(1, 1, true), submission(2, 1, true)],
    });

    assert!(!state.loading_problems);
    assert!(state.loading_recommendation, "recommendation still pending");
    assert_eq!(state.problems.len(), 2);
    assert_eq!(state.problems_solved, 1);
    assert_eq!(state.total_problems, 2);
    assert_eq!(state.progress, 50);
}

#[test]
fn problems_failed_aborts_whole_load() {
    let mut state = DashboardState::default();
    let generation = state.begin_load();

    state.apply(DashboardEvent::ProblemsFailed { generation });

    assert!(!state.loading_problems);
    assert!(!state.loading_recommendation);
    assert!(state.problems.is_empty());
    assert_eq!(state.progress, 0);
}

#[test]
fn recommendation_resolves_independently_of_problems() {
    let mut state = DashboardState::default();
    let generation = state.begin_load();

    // Recommendation lands first; problems must still show as loading.
    state.apply(DashboardEvent::RecommendationLoaded {
        generation,
        problem: problem(99, "AI Special"),
    });
    assert!(state.loading_problems);
    assert!(!state.loading_recommendation);
    assert_eq!(state.recommended.as_ref().map(|p| p.id), Some(99));

    state.apply(DashboardEvent::ProblemsLoaded {
        generation,
        problems: vec![problem(1, "Two Sum")],
        submissions: vec![],
    });
    assert!(!state.loading_problems);
    assert_eq!(state.recommended.as_ref().map(|p| p.id), Some(99));
}

#[test]
fn recommendation_unavailable_leaves_slot_empty() {
    let mut state = DashboardState::default();
    let generation = state.begin_load();
    state.apply(DashboardEvent::RecommendationUnavailable { generation });
    assert!(!state.loading_recommendation);
    assert!(state.recommended.is_none());
}

// =============================================================
// generation guard
// =============================================================

#[test]
fn stale_generation_event_is_dropped() {
    let mut state = DashboardState::default();
    let old = state.begin_load();
    let new = state.begin_load();

    state.apply(DashboardEvent::ProblemsLoaded {
        generation: new,
        problems: vec![problem(1, "Two Sum")],
        submissions: vec![],
    });

    // A slow response from the superseded load arrives afterward.
    state.apply(DashboardEvent::ProblemsLoaded {
        generation: old,
        problems: vec![problem(2, "Stale")],
        submissions: vec![],
    });

    assert_eq!(state.problems.len(), 1);
    assert_eq!(state.problems[0].id, 1);
}

#[test]
fn stale_failure_cannot_clear_fresh_data() {
    let mut state = DashboardState::default();
    let old = state.begin_load();
    let new = state.begin_load();

    state.apply(DashboardEvent::ProblemsLoaded {
        generation: new,
        problems: vec![problem(1, "Two Sum")],
        submissions: vec![],
    });
    state.apply(DashboardEvent::ProblemsFailed { generation: old });

    assert_eq!(state.problems.len(), 1);
    assert!(!state.loading_problems);
}

#[test]
fn begin_load_resets_loading_flags() {
    let mut state = DashboardState::default();
    let generation = state.begin_load();
    state.apply(DashboardEvent::ProblemsFailed { generation });
    assert!(!state.loading_problems);

    state.begin_load();
    assert!(state.loading_problems);
    assert!(state.loading_recommendation);
}
