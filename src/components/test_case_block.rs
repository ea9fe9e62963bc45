//! Detail block for one test-case result on the feedback page.

use leptos::prelude::*;

use crate::net::types::TestCaseResult;

/// One test case, rendered in full: status, literal input/expected/actual
/// values, hidden flag, and any error message. Hidden cases are shown
/// like the rest, just flagged.
#[component]
pub fn TestCaseBlock(result: TestCaseResult) -> impl IntoView {
    let passed = result.passed();
    let block_class = if passed {
        "test-case test-case--passed"
    } else {
        "test-case test-case--failed"
    };
    let label = format!(
        "Test Case #{} - {}",
        result.test_case_id + 1,
        result.status.to_uppercase()
    );
    let hidden_tag = result
        .is_hidden
        .then(|| view! { <span class="test-case__hidden">"(Hidden)"</span> });
    let error_row = result.error_message.as_ref().map(|msg| {
        let msg = msg.clone();
        view! {
            <div class="test-case__error">
                <span class="test-case__field">"Error:"</span>
                {msg}
            </div>
        }
    });

    view! {
        <div class=block_class>
            <div class="test-case__head">
                <span class="test-case__label">{label}</span>
                {hidden_tag}
            </div>
            <div class="test-case__body">
                <div>
                    <span class="test-case__field">"Input:"</span>
                    <code>{result.input.to_string()}</code>
                </div>
                <div>
                    <span class="test-case__field">"Expected:"</span>
                    <code>{result.expected_output.to_string()}</code>
                </div>
                <div>
                    <span class="test-case__field">"Your Output:"</span>
                    <code>{result.actual_output.to_string()}</code>
                </div>
                {error_row}
            </div>
        </div>
    }
}
