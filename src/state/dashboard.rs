#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use crate::net::types::{Problem, Submission};

/// Dashboard state: the problem catalog plus the AI recommendation slot,
/// each with its own loading flag so the two sections resolve
/// independently and out of order.
///
/// All mutation goes through [`DashboardState::begin_load`] and
/// [`DashboardState::apply`]. Every event carries the generation it was
/// started under; events from an older generation (a torn-down or
/// superseded load) are dropped on arrival, so a slow response can never
/// clobber state that a newer load already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub problems: Vec<Problem>,
    pub recommended: Option<Problem>,
    pub problems_solved: usize,
    pub total_problems: usize,
    pub progress: u32,
    pub loading_problems: bool,
    pub loading_recommendation: bool,
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            problems: Vec::new(),
            recommended: None,
            problems_solved: 0,
            total_problems: 0,
            progress: 0,
            loading_problems: true,
            loading_recommendation: true,
            generation: 0,
        }
    }
}

/// Outcome of one of the dashboard's fetch pipelines, tagged with the
/// generation the pipeline was started under.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    /// Catalog fetched; submissions are empty when no token was held or
    /// the history fetch failed (both degrade silently).
    ProblemsLoaded {
        generation: u64,
        problems: Vec<Problem>,
        submissions: Vec<Submission>,
    },
    /// Catalog fetch failed. Aborts the whole initial load: both
    /// sections stop loading and the catalog renders empty.
    ProblemsFailed { generation: u64 },
    /// Recommendation fetched.
    RecommendationLoaded { generation: u64, problem: Problem },
    /// Recommendation skipped (no token) or failed (degrades silently).
    RecommendationUnavailable { generation: u64 },
}

impl DashboardEvent {
    fn generation(&self) -> u64 {
        match self {
            Self::ProblemsLoaded { generation, .. }
            | Self::ProblemsFailed { generation }
            | Self::RecommendationLoaded { generation, .. }
            | Self::RecommendationUnavailable { generation } => *generation,
        }
    }
}

impl DashboardState {
    /// Start a fresh load cycle: both sections go back to loading and a
    /// new generation is issued for the pipelines to stamp their events
    /// with. Outstanding events from earlier cycles become no-ops.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading_problems = true;
        self.loading_recommendation = true;
        self.generation
    }

    /// Apply a pipeline outcome. Stale-generation events are discarded.
    pub fn apply(&mut self, event: DashboardEvent) {
        if event.generation() != self.generation {
            return;
        }
        match event {
            DashboardEvent::ProblemsLoaded {
                problems,
                submissions,
                ..
            } => {
                let solved = solved_count(&submissions);
                let total = problems.len();
                self.problems_solved = solved;
                self.total_problems = total;
                self.progress = progress(solved, total);
                self.problems = problems;
                self.loading_problems = false;
            }
            DashboardEvent::ProblemsFailed { .. } => {
                self.problems = Vec::new();
                self.problems_solved = 0;
                self.total_problems = 0;
                self.progress = 0;
                self.loading_problems = false;
                self.loading_recommendation = false;
            }
            DashboardEvent::RecommendationLoaded { problem, .. } => {
                self.recommended = Some(problem);
                self.loading_recommendation = false;
            }
            DashboardEvent::RecommendationUnavailable { .. } => {
                self.recommended = None;
                self.loading_recommendation = false;
            }
        }
    }
}

/// Number of distinct problems with at least one passing submission.
/// Repeat passes of the same problem count once.
pub fn solved_count(submissions: &[Submission]) -> usize {
    let solved: HashSet<i64> = submissions
        .iter()
        .filter(|s| s.all_tests_passed)
        .map(|s| s.problem_id)
        .collect();
    solved.len()
}

/// Progress percentage, rounded. Zero when the catalog is empty.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress(solved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (solved as f64 / total as f64 * 100.0).round() as u32
}
