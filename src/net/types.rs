//! Serde shapes for backend API payloads.
//!
//! Field names mirror the backend's JSON exactly. Everything here is
//! deserialization-tolerant: unknown fields are ignored and optional
//! fields default, so a newer backend never breaks the client.

/// A practice problem as returned by `/api/problems/` and the
/// recommendation endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Problem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One submission from `/api/submissions/me`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    pub id: i64,
    pub problem_id: i64,
    #[serde(default)]
    pub all_tests_passed: bool,
    #[serde(default)]
    pub test_results: Vec<TestCaseResult>,
}

/// Per-test-case outcome attached to a submission.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TestCaseResult {
    pub test_case_id: i64,
    pub status: String,
    #[serde(default)]
    pub input: serde_json::Value,
    #[serde(default)]
    pub expected_output: serde_json::Value,
    #[serde(default)]
    pub actual_output: serde_json::Value,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
}

impl TestCaseResult {
    /// Whether the backend marked this case as passed.
    pub fn passed(&self) -> bool {
        self.status == "passed"
    }
}

/// AI analysis of a submission from `/api/analysis/{id}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisFeedback {
    #[serde(default)]
    pub complexity_match: Option<f64>,
    #[serde(default)]
    pub estimated_time_complexity: Option<String>,
    #[serde(default)]
    pub estimated_space_complexity: Option<String>,
    #[serde(default)]
    pub optimal_time_complexity: Option<String>,
    #[serde(default)]
    pub optimal_space_complexity: Option<String>,
    #[serde(default)]
    pub ast_features: Option<AstFeatures>,
    #[serde(default)]
    pub improvement_suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

/// Structural code-analysis signals produced by the backend analyzer.
/// Consumed as opaque data; the client only renders them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AstFeatures {
    #[serde(default)]
    pub loops: i64,
    #[serde(default)]
    pub nested_loops: bool,
    #[serde(default)]
    pub uses_hashmap: bool,
    #[serde(default)]
    pub recursion: bool,
    #[serde(default)]
    pub data_structures: Vec<String>,
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Profile of the logged-in user from `/api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The logged-in user as held by the app shell: the bearer token plus
/// whatever profile enrichment the `/api/auth/me` call produced.
///
/// Profile enrichment is best-effort. A session built from a login whose
/// profile fetch failed carries only the email and token.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserSession {
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}
