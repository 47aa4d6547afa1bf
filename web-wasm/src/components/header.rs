//! Header with page navigation

use leptos::prelude::*;
use perfect_cv_common::Page;

use crate::app::AppContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let nav_button = move |target: Page| {
        view! {
            <button
                class=move || if ctx.page() == target { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.navigate(target)
            >
                {target.title()}
            </button>
        }
    };

    view! {
        <header class="header">
            <h1>"Perfect CV Match"</h1>
            <p class="text-muted">"Upload your resume and compete for the top ATS score"</p>

            <Show when=move || ctx.participant().is_some()>
                <nav class="nav">
                    {nav_button(Page::Home)}
                    {nav_button(Page::Scores)}
                    {nav_button(Page::Leaderboard)}
                    <button class="nav-btn logout" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
