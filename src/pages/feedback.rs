//! Feedback page: AI analysis of the latest submission.
//!
//! The submission context either carries the analysis inline (no network
//! call), carries only a submission id (authenticated fetch), or carries
//! neither (terminal error). A missing or unfetchable analysis renders a
//! dedicated error screen whose only recovery is going back to the
//! dashboard; no partial rendering, no retry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::components::test_case_block::TestCaseBlock;
use crate::net::api;
use crate::net::types::AnalysisFeedback;
use crate::state::feedback::{
    FeedbackPhase, Resolution, SubmissionContext, renderable_results, resolve, score,
};
use crate::state::session::SessionState;

const FETCH_FAILED: &str = "Failed to load AI feedback";
const NO_SUBMISSION: &str = "No submission found";

/// Feedback page. Resolution runs once per context change; a stale
/// in-flight analysis response is discarded by the generation check.
#[component]
pub fn FeedbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let context = expect_context::<RwSignal<SubmissionContext>>();
    let navigate = use_navigate();

    let phase = RwSignal::new(FeedbackPhase::Loading);
    let generation = RwSignal::new(0_u64);

    Effect::new(move || {
        let ctx = context.get();
        let current = generation.get_untracked() + 1;
        generation.set(current);

        match resolve(&ctx) {
            Resolution::UseEmbedded(analysis) => phase.set(FeedbackPhase::Ready(analysis)),
            Resolution::FetchById(id) => {
                phase.set(FeedbackPhase::Loading);
                let token = session.get_untracked().token();
                leptos::task::spawn_local(async move {
                    let next = match token {
                        Some(token) => match api::fetch_analysis(&token, id).await {
                            Ok(analysis) => FeedbackPhase::Ready(analysis),
                            Err(err) => {
                                log::warn!("analysis fetch failed: {err}");
                                FeedbackPhase::Error(FETCH_FAILED.to_owned())
                            }
                        },
                        None => FeedbackPhase::Error(FETCH_FAILED.to_owned()),
                    };
                    if generation.get_untracked() == current {
                        phase.set(next);
                    }
                });
            }
            Resolution::NoSubmission => phase.set(FeedbackPhase::Error(NO_SUBMISSION.to_owned())),
        }
    });

    let go_dashboard = move |_| {
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="feedback-page">
            {move || match phase.get() {
                FeedbackPhase::Loading => {
                    view! {
                        <div class="feedback-page__pending">
                            <Spinner label="AI is Analyzing Your Code..."/>
                            <p class="feedback-page__hint">"This may take a few seconds"</p>
                        </div>
                    }
                        .into_any()
                }
                FeedbackPhase::Error(message) => {
                    view! {
                        <div class="feedback-page__terminal">
                            <h2>{message}</h2>
                            <p>"Make sure backend is running and you submitted code"</p>
                            <button class="btn btn--primary" on:click=go_dashboard.clone()>
                                "Go to Dashboard"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                FeedbackPhase::Ready(analysis) => {
                    view! {
                        <FeedbackBody
                            analysis=analysis
                            context=context.get_untracked()
                            on_back=Callback::new(go_dashboard.clone())
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// The resolved feedback screen: test summary, every test-case block,
/// complexity analysis, code structure, suggestions, and the free-text
/// explanation. Sections whose data is absent are omitted entirely.
#[component]
fn FeedbackBody(
    analysis: AnalysisFeedback,
    context: SubmissionContext,
    on_back: Callback<leptos::ev::MouseEvent>,
) -> impl IntoView {
    let score_value = score(&analysis);
    let problem_row = context.problem_title.clone().map(|title| {
        view! {
            <p class="feedback-page__problem">"Problem: " <span>{title}</span></p>
        }
    });

    let summary = format!("{} / {}", context.passed_tests, context.total_tests);
    let summary_class = if context.all_tests_passed {
        "feedback-page__summary feedback-page__summary--passed"
    } else {
        "feedback-page__summary"
    };

    // Every test case renders, hidden ones included.
    let test_blocks = renderable_results(&context)
        .iter()
        .cloned()
        .map(|result| view! { <TestCaseBlock result=result/> })
        .collect::<Vec<_>>();

    let complexity = score_value.map(|score| {
        let estimated_time = analysis.estimated_time_complexity.clone().unwrap_or_default();
        let optimal_time = analysis.optimal_time_complexity.clone().unwrap_or_default();
        let estimated_space = analysis.estimated_space_complexity.clone().unwrap_or_default();
        let optimal_space = analysis.optimal_space_complexity.clone().unwrap_or_default();
        let width = format!("{score}%");
        view! {
            <section class="feedback-page__section">
                <h2>"Complexity Analysis"</h2>
                <div class="feedback-page__complexity">
                    <div>
                        <p>"Time Complexity"</p>
                        <p class="feedback-page__big">{estimated_time}</p>
                        <p class="feedback-page__hint">"Optimal: " {optimal_time}</p>
                    </div>
                    <div>
                        <p>"Space Complexity"</p>
                        <p class="feedback-page__big">{estimated_space}</p>
                        <p class="feedback-page__hint">"Optimal: " {optimal_space}</p>
                    </div>
                </div>
                <div class="feedback-page__score">
                    <p>"Optimization Score"</p>
                    <div class="feedback-page__score-track">
                        <div class="feedback-page__score-fill" style:width=width></div>
                    </div>
                    <span class="feedback-page__big">{score}"%"</span>
                </div>
            </section>
        }
    });

    let structure = analysis.ast_features.clone().map(|features| {
        let data_structures = (!features.data_structures.is_empty()).then(|| {
            view! {
                <div class="feedback-page__structures">
                    <span>"Data Structures:"</span>
                    {features
                        .data_structures
                        .iter()
                        .map(|ds| view! { <span class="feedback-page__tag">{ds.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
            }
        });
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        view! {
            <section class="feedback-page__section">
                <h2>"Code Structure"</h2>
                <div class="feedback-page__facts">
                    <div><span>"Loops"</span><span>{features.loops}</span></div>
                    <div><span>"Nested Loops"</span><span>{yes_no(features.nested_loops)}</span></div>
                    <div><span>"Uses HashMap"</span><span>{yes_no(features.uses_hashmap)}</span></div>
                    <div><span>"Recursion"</span><span>{yes_no(features.recursion)}</span></div>
                </div>
                {data_structures}
            </section>
        }
    });

    let suggestions = analysis
        .improvement_suggestions
        .clone()
        .filter(|s| !s.is_empty())
        .map(|suggestions| {
            view! {
                <section class="feedback-page__section">
                    <h2>"Suggestions"</h2>
                    <ul class="feedback-page__suggestions">
                        {suggestions
                            .iter()
                            .map(|s| view! { <li>{s.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            }
        });

    let explanation = analysis.feedback_text.clone().map(|text| {
        view! {
            <section class="feedback-page__section">
                <h2>"AI Feedback"</h2>
                <div class="feedback-page__text">{text}</div>
            </section>
        }
    });

    view! {
        <div class="feedback-page__body">
            <header class="feedback-page__header">
                <h1>"AI-Generated Feedback"</h1>
                <button class="btn" on:click=move |ev| on_back.run(ev)>
                    "Back to Dashboard"
                </button>
            </header>
            {problem_row}

            <section class="feedback-page__section">
                <h2>"Test Results"</h2>
                <div class=summary_class>
                    <p>"Tests Passed"</p>
                    <p class="feedback-page__big">{summary}</p>
                </div>
                <div class="feedback-page__cases">{test_blocks}</div>
            </section>

            {complexity}
            {structure}
            {suggestions}
            {explanation}
        </div>
    }
}
