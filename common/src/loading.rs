//! Page data loading
//!
//! A page creates one [`LoadScope`] when it mounts and cancels it when it
//! unmounts. Requests cannot be aborted, so results arriving after
//! cancellation are dropped by checking the [`LoadToken`] before writing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LoadScope {
    cancelled: Arc<AtomicBool>,
}

impl LoadScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> LoadToken {
        LoadToken {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone)]
pub struct LoadToken {
    cancelled: Arc<AtomicBool>,
}

impl LoadToken {
    pub fn is_live(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire)
    }

    /// Run `apply` only while the owning page is still mounted.
    /// Returns whether it ran.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Loaded(value) => Loadable::Loaded(f(value)),
            Loadable::Failed(message) => Loadable::Failed(message),
        }
    }
}

/// What a list page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    /// Loaded with no rows; shown as the page's empty-state message.
    Empty,
    Rows(&'a [T]),
    Error(&'a str),
}

impl<T> Loadable<Vec<T>> {
    pub fn list_view(&self) -> ListView<'_, T> {
        match self {
            Loadable::Loading => ListView::Loading,
            Loadable::Loaded(rows) if rows.is_empty() => ListView::Empty,
            Loadable::Loaded(rows) => ListView::Rows(rows),
            Loadable::Failed(message) => ListView::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LeaderboardEntry;

    #[test]
    fn test_token_live_until_cancel() {
        let scope = LoadScope::new();
        let token = scope.token();
        assert!(token.is_live());
        scope.cancel();
        assert!(!token.is_live());
        assert!(scope.is_cancelled());
    }

    #[test]
    fn test_apply_after_cancel_is_dropped() {
        let scope = LoadScope::new();
        let token = scope.token();
        let mut written = None;

        scope.cancel();
        let ran = token.apply(42, |v| written = Some(v));
        assert!(!ran);
        assert!(written.is_none());
    }

    #[test]
    fn test_apply_while_live() {
        let scope = LoadScope::new();
        let mut written = None;
        assert!(scope.token().apply("rows", |v| written = Some(v)));
        assert_eq!(written, Some("rows"));
    }

    #[test]
    fn test_new_scope_is_independent() {
        let first = LoadScope::new();
        let stale = first.token();
        first.cancel();

        let second = LoadScope::new();
        assert!(!stale.is_live());
        assert!(second.token().is_live());
    }

    #[test]
    fn test_empty_leaderboard_is_empty_state_not_error() {
        let state: Loadable<Vec<LeaderboardEntry>> = Loadable::Loaded(vec![]);
        assert_eq!(state.list_view(), ListView::Empty);
    }

    #[test]
    fn test_list_view_variants() {
        let loading: Loadable<Vec<u32>> = Loadable::Loading;
        assert_eq!(loading.list_view(), ListView::Loading);

        let rows: Loadable<Vec<u32>> = Loadable::Loaded(vec![1, 2]);
        assert_eq!(rows.list_view(), ListView::Rows(&[1, 2][..]));

        let failed: Loadable<Vec<u32>> = Loadable::from_result(Err("HTTP 500: Internal Server Error"));
        assert_eq!(failed.list_view(), ListView::Error("HTTP 500: Internal Server Error"));
    }

    #[test]
    fn test_map() {
        let loaded: Loadable<u32> = Loadable::from_result::<String>(Ok(3));
        assert_eq!(loaded.map(|v| v * 2).loaded(), Some(&6));
    }
}
