//! One component per page. Each page loads its own data on mount.

pub mod home;
pub mod leaderboard;
pub mod login;
pub mod scores;

use leptos::prelude::*;
use perfect_cv_common::LoadScope;

/// Scope for the current mount. Cancelled when the page is torn down, so
/// late responses are dropped instead of written.
pub(crate) fn mount_scope() -> LoadScope {
    let scope = LoadScope::new();
    let on_unmount = scope.clone();
    on_cleanup(move || on_unmount.cancel());
    scope
}
