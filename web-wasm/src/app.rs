//! Application shell
//!
//! Owns the session and the current page. Pages reach both through
//! [`AppContext`].

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use perfect_cv_common::format::health_line;
use perfect_cv_common::{ActiveParticipant, Page, Participant, SessionContext, Shell};

use crate::api::client;
use crate::components::header::Header;
use crate::pages::{home::HomePage, leaderboard::LeaderboardPage, login::LoginPage, scores::ScoresPage};
use crate::storage::LocalStorageStore;

#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<SessionContext<LocalStorageStore>>,
    shell: RwSignal<Shell>,
}

impl AppContext {
    pub fn page(&self) -> Page {
        self.shell.with(|s| s.page())
    }

    pub fn notice(&self) -> Option<String> {
        self.shell.with(|s| s.notice().map(str::to_string))
    }

    pub fn participant(&self) -> Option<ActiveParticipant> {
        self.session.with(|s| s.active().cloned())
    }

    pub fn participant_id(&self) -> Option<String> {
        self.session.with_untracked(|s| s.participant_id().map(str::to_string))
    }

    pub fn navigate(&self, target: Page) {
        let logged_in = self.session.with_untracked(|s| s.is_logged_in());
        self.shell.update(|s| {
            s.navigate(target, logged_in);
        });
    }

    pub fn login(&self, participant: &Participant) -> Result<(), String> {
        let mut result = Ok(());
        self.session.update(|s| result = s.login(participant));
        result.map_err(|e| e.to_string())?;
        self.shell.update(|s| {
            s.on_login(participant.message.as_deref());
        });
        Ok(())
    }

    pub fn logout(&self) {
        self.session.update(|s| {
            if let Err(e) = s.logout() {
                console::error!(format!("logout: {}", e));
            }
        });
        self.shell.update(|s| {
            s.on_logout();
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = client::config();
    console::log!(format!("Scoring service: {}", config.base_url()));
    if !config.has_api_key() {
        console::warn!("PERFECT_CV_API_KEY not set at build time; requests go out without X-API-Key");
    }
    spawn_local(async {
        let status = client::health().await;
        let line = health_line(status.as_ref());
        match status {
            Some(_) => console::log!(line),
            None => console::warn!(line),
        }
    });

    let session = SessionContext::load(LocalStorageStore);
    let shell = Shell::launch(session.is_logged_in());
    let ctx = AppContext {
        session: RwSignal::new(session),
        shell: RwSignal::new(shell),
    };
    provide_context(ctx);

    view! {
        <div class="container">
            <Header />

            {move || match ctx.page() {
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Scores => view! { <ScoresPage /> }.into_any(),
                Page::Leaderboard => view! { <LeaderboardPage /> }.into_any(),
            }}
        </div>
    }
}
