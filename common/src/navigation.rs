//! Screen selection
//!
//! Four mutually exclusive pages, no nesting. Navigation only moves the page
//! pointer; data is fetched by each page when it mounts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Page {
    #[default]
    Login,
    Home,
    Scores,
    Leaderboard,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Home => "home",
            Page::Scores => "scores",
            Page::Leaderboard => "leaderboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Register / Login",
            Page::Home => "Home",
            Page::Scores => "My Scores",
            Page::Leaderboard => "Leaderboard",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Page::Login)
    }
}

/// Current page plus the rules for moving between pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shell {
    page: Page,
    notice: Option<String>,
}

impl Shell {
    /// A persisted participant goes straight to Home.
    pub fn launch(logged_in: bool) -> Self {
        Self {
            page: if logged_in { Page::Home } else { Page::Login },
            notice: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Backend message from the last login, shown once on Home.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Move to `target`. Pages behind the session fall back to Login when
    /// nobody is logged in. Returns the page actually shown.
    pub fn navigate(&mut self, target: Page, logged_in: bool) -> Page {
        self.notice = None;
        self.page = if target.requires_session() && !logged_in {
            Page::Login
        } else {
            target
        };
        self.page
    }

    pub fn on_login(&mut self, message: Option<&str>) -> Page {
        self.notice = message.filter(|m| !m.trim().is_empty()).map(str::to_string);
        self.page = Page::Home;
        self.page
    }

    pub fn on_logout(&mut self) -> Page {
        self.notice = None;
        self.page = Page::Login;
        self.page
    }
}
