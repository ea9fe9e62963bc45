#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::net::types::{AnalysisFeedback, TestCaseResult};

/// Everything the feedback page knows about the submission it is
/// showing. Handed over by the shell after a code submission: either the
/// analysis came back inline, or only a submission id did and the page
/// fetches the analysis itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionContext {
    pub analysis: Option<AnalysisFeedback>,
    pub submission_id: Option<i64>,
    pub passed_tests: i64,
    pub total_tests: i64,
    pub all_tests_passed: bool,
    pub test_results: Vec<TestCaseResult>,
    pub problem_title: Option<String>,
}

/// How a submission context resolves to analysis data. Evaluated once
/// per context change.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Analysis was delivered inline; no network call.
    UseEmbedded(AnalysisFeedback),
    /// Only an id is known; fetch `/api/analysis/{id}`.
    FetchById(i64),
    /// Neither analysis nor id: terminal error, nothing to fetch.
    NoSubmission,
}

/// Decide how to obtain the analysis for a context. Embedded data wins
/// over an id so a page never refetches what it was already given.
pub fn resolve(ctx: &SubmissionContext) -> Resolution {
    if let Some(analysis) = &ctx.analysis {
        return Resolution::UseEmbedded(analysis.clone());
    }
    if let Some(id) = ctx.submission_id {
        return Resolution::FetchById(id);
    }
    Resolution::NoSubmission
}

/// Test results the page must render: all of them, in order. Hidden
/// cases are flagged by the view, never filtered or truncated.
pub fn renderable_results(ctx: &SubmissionContext) -> &[TestCaseResult] {
    &ctx.test_results
}

/// Display phase of the feedback page.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedbackPhase {
    Loading,
    Ready(AnalysisFeedback),
    /// Terminal for the page; the only recovery is navigating back.
    Error(String),
}

/// Optimization score: the analyzer's complexity-match ratio scaled to
/// an integer percentage. `None` when the analyzer produced no ratio, in
/// which case the score section is omitted entirely.
#[allow(clippy::cast_possible_truncation)]
pub fn score(analysis: &AnalysisFeedback) -> Option<i64> {
    analysis.complexity_match.map(|m| (m * 100.0).round() as i64)
}
