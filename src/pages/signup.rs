//! Signup page: creates an account, then sends the user to login.
//!
//! No auto-login: the backend returns the created profile but the flow
//! deliberately routes through the login form. The display name is sent
//! under the backend's `username` key.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;

/// Registration form. Failures render inline with the same `detail`
/// normalization as login; success navigates to `/login`.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }

        error.set(None);
        pending.set(true);
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&name_value, &email_value, &password_value).await {
                Ok(()) => {
                    pending.set(false);
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => {
                    error.set(Some(err.message));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="session-page">
            <div class="session-page__card">
                <h2>"Sign Up"</h2>
                <p class="session-page__subtitle">"Create your CodeMentor account"</p>

                <Show when=move || error.get().is_some()>
                    <div class="session-page__error">
                        "Error: " {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit class="session-page__form">
                    <label class="session-page__label">
                        "Name"
                        <input
                            class="session-page__input"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="session-page__label">
                        "Email"
                        <input
                            class="session-page__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="session-page__label">
                        "Password"
                        <input
                            class="session-page__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary session-page__submit"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="session-page__switch">
                    "Already have an account? " <a href="/login">"Log In"</a>
                </p>
            </div>
        </div>
    }
}
