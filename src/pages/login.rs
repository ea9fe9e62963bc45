//! Login page: exchanges credentials for a bearer token.
//!
//! The token endpoint is OAuth2-form-shaped, so the email travels under
//! the `username` key. On success the token is persisted first, then the
//! profile fetch enriches the session best-effort: a failed `/auth/me`
//! still completes login with just the email and token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::UserSession;
use crate::state::session::SessionState;
use crate::util::token_store;

/// Login form. Submitting disables the button until the attempt
/// resolves; failures render inline and the form stays editable.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.trim().is_empty() {
            return;
        }

        error.set(None);
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(token) => {
                    // Persist before the profile fetch so an authenticated
                    // reload works even if enrichment fails.
                    token_store::save(&token.access_token);
                    let profile = api::fetch_current_user(&token.access_token).await;
                    if profile.is_none() {
                        log::warn!("profile fetch failed; continuing with token only");
                    }
                    session.update(|s| {
                        s.log_in(UserSession {
                            email: email_value,
                            token: token.access_token,
                            profile,
                        });
                    });
                    pending.set(false);
                    navigate("/", NavigateOptions::default());
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
                <h2>"Log In"</h2>
                <p class="session-page__subtitle">"Access your CodeMentor account"</p>

                <Show when=move || error.get().is_some()>
                    <div class="session-page__error">
                        "Error: " {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit class="session-page__form">
                    <label class="session-page__label">
                        "Email"
                        <input
                            class="session-page__input"
                            type="email"
                            required
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
                            required
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
                        {move || if pending.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="session-page__switch">
                    "Don't have an account? " <a href="/signup">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
