//! Dashboard page: problem catalog, progress, and the AI recommendation.
//!
//! Two fetch pipelines start on mount (and again whenever the session
//! identity changes). They resolve independently and out of order; each
//! section shows its own spinner. All state changes go through the
//! generation-guarded reducer in `state::dashboard`, so responses from a
//! superseded load are dropped instead of clobbering fresh data.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::problem_card::ProblemCard;
use crate::components::progress_bar::ProgressBar;
use crate::components::spinner::Spinner;
use crate::net::api;
use crate::net::types::Problem;
use crate::state::dashboard::{DashboardEvent, DashboardState};
use crate::state::session::SessionState;
use crate::util::token_store;

/// Dashboard page. Works without a session: the catalog is public, but
/// submissions and the recommendation need a token and are skipped
/// entirely when none is held.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let selected = expect_context::<RwSignal<Option<Problem>>>();
    let navigate = use_navigate();

    let state = RwSignal::new(DashboardState::default());

    Effect::new(move || {
        let token = session.get().token();
        let generation = state.write().begin_load();

        // Problem pipeline: catalog, then (with a token) the submission
        // history for progress. A catalog failure aborts the whole load;
        // a history failure degrades to zero submissions.
        {
            let token = token.clone();
            leptos::task::spawn_local(async move {
                match api::fetch_problems(token.as_deref()).await {
                    Ok(problems) => {
                        let submissions = match &token {
                            Some(token) => {
                                api::fetch_my_submissions(token).await.unwrap_or_else(|err| {
                                    log::warn!("submission history fetch failed: {err}");
                                    Vec::new()
                                })
                            }
                            None => Vec::new(),
                        };
                        state.update(|s| {
                            s.apply(DashboardEvent::ProblemsLoaded {
                                generation,
                                problems,
                                submissions,
                            });
                        });
                    }
                    Err(err) => {
                        log::warn!("problem catalog fetch failed: {err}");
                        state.update(|s| s.apply(DashboardEvent::ProblemsFailed { generation }));
                    }
                }
            });
        }

        // Recommendation pipeline: token required; failures leave the
        // slot empty.
        match token {
            Some(token) => {
                leptos::task::spawn_local(async move {
                    let event = match api::fetch_ai_problem(&token).await {
                        Ok(problem) => DashboardEvent::RecommendationLoaded { generation, problem },
                        Err(err) => {
                            log::warn!("recommendation fetch failed: {err}");
                            DashboardEvent::RecommendationUnavailable { generation }
                        }
                    };
                    state.update(|s| s.apply(event));
                });
            }
            None => {
                state.update(|s| s.apply(DashboardEvent::RecommendationUnavailable { generation }));
            }
        }
    });

    let on_select = Callback::new(move |problem: Problem| selected.set(Some(problem)));

    let on_logout = move |_| {
        token_store::clear();
        session.update(SessionState::log_out);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"CodeMentor"</h1>
                <Show when=move || session.get().is_logged_in()>
                    <button class="btn" on:click=on_logout.clone()>
                        "Log Out"
                    </button>
                </Show>
            </header>

            {move || {
                let s = state.get();
                view! { <ProgressBar solved=s.problems_solved total=s.total_problems progress=s.progress/> }
            }}

            <div class="dashboard-page__columns">
                <section class="dashboard-page__section">
                    <h2>"Problems"</h2>
                    {move || {
                        let s = state.get();
                        if s.loading_problems {
                            view! { <Spinner label="Loading problems..."/> }.into_any()
                        } else if s.problems.is_empty() {
                            view! {
                                <div class="dashboard-page__empty">
                                    <p>"No problems available"</p>
                                    <p class="dashboard-page__hint">"Check if backend is running"</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="dashboard-page__cards">
                                    {s
                                        .problems
                                        .into_iter()
                                        .map(|problem| {
                                            view! { <ProblemCard problem=problem on_select=on_select/> }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <section class="dashboard-page__section dashboard-page__section--ai">
                    <h2>"AI Recommendations"</h2>
                    {move || {
                        let s = state.get();
                        if s.loading_recommendation {
                            view! { <Spinner label="Loading AI problem..."/> }.into_any()
                        } else {
                            match s.recommended {
                                Some(problem) => {
                                    view! {
                                        <ProblemCard
                                            problem=problem
                                            on_select=on_select
                                            badge="AI Generated"
                                        />
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <div class="dashboard-page__empty">
                                            <p>"No AI Problem Yet"</p>
                                            <p class="dashboard-page__hint">
                                                "Solve problems to get personalized AI-generated problems"
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
