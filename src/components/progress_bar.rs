//! Solved-problems progress bar for the dashboard header.

use leptos::prelude::*;

/// Progress banner: solved/total count plus a filled percentage bar.
#[component]
pub fn ProgressBar(solved: usize, total: usize, progress: u32) -> impl IntoView {
    let width = format!("{progress}%");
    let percent_label = (progress > 0).then(|| view! { <span class="progress__percent">{progress}"%"</span> });

    view! {
        <div class="progress">
            <div class="progress__head">
                <h2>"Your Progress"</h2>
                <span class="progress__count">{solved}" / "{total}" problems solved"</span>
            </div>
            <div class="progress__track">
                <div class="progress__fill" style:width=width>
                    {percent_label}
                </div>
            </div>
        </div>
    }
}
