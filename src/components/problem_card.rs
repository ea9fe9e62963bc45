//! Clickable card for a problem in the dashboard lists.

use leptos::prelude::*;

use crate::net::types::Problem;

/// CSS modifier for a difficulty badge. Case-insensitive; unknown
/// difficulties fall back to the neutral style.
pub fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty.to_lowercase().as_str() {
        "easy" => "badge--easy",
        "medium" => "badge--medium",
        "hard" => "badge--hard",
        _ => "badge--default",
    }
}

/// A problem entry. Clicking it hands the full record to `on_select`;
/// nothing is mutated locally.
#[component]
pub fn ProblemCard(
    problem: Problem,
    on_select: Callback<Problem>,
    /// Badge text override, used by the AI slot ("AI Generated").
    #[prop(optional)]
    badge: Option<&'static str>,
) -> impl IntoView {
    let badge_class = format!("badge {}", difficulty_class(&problem.difficulty));
    let badge_text = badge.map_or_else(|| problem.difficulty.clone(), str::to_owned);
    let title = problem.title.clone();
    let description = problem.description.clone();

    let tag_row = (!problem.tags.is_empty()).then(|| {
        view! {
            <div class="problem-card__tags">
                {problem
                    .tags
                    .iter()
                    .take(3)
                    .map(|tag| view! { <span class="problem-card__tag">{tag.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <button class="problem-card" on:click=move |_| on_select.run(problem.clone())>
            <div class="problem-card__head">
                <h3 class="problem-card__title">{title}</h3>
                <span class=badge_class>{badge_text}</span>
            </div>
            <p class="problem-card__description">{description}</p>
            {tag_row}
        </button>
    }
}
