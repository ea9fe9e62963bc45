//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::Problem;
use crate::pages::{
    dashboard::DashboardPage, feedback::FeedbackPage, login::LoginPage, signup::SignupPage,
};
use crate::state::feedback::SubmissionContext;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns all cross-page state: the session (token hydrated from storage
/// on boot), the currently selected problem, and the submission context
/// the feedback page consumes. Pages receive all of it via context; the
/// session pages are the only writers of the token.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::from_stored_token());
    let selected_problem = RwSignal::new(None::<Problem>);
    let submission_context = RwSignal::new(SubmissionContext::default());

    provide_context(session);
    provide_context(selected_problem);
    provide_context(submission_context);

    view! {
        <Stylesheet id="leptos" href="/pkg/codementor.css"/>
        <Title text="CodeMentor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("feedback") view=FeedbackPage/>
            </Routes>
        </Router>
    }
}
