//! Leaderboard page with competition stats

use leptos::prelude::*;
use leptos::task::spawn_local;
use perfect_cv_common::format::{format_percent, leaderboard_row, LEADERBOARD_EMPTY};
use perfect_cv_common::{CompetitionStats, DistributionBucket, LeaderboardEntry, ListView, Loadable};

use super::mount_scope;
use crate::api::client;

fn distribution(title: &'static str, buckets: Vec<DistributionBucket>) -> impl IntoView {
    (!buckets.is_empty()).then(|| {
        view! {
            <div class="distribution">
                <h4>{title}</h4>
                <ul>
                    {buckets
                        .into_iter()
                        .map(|bucket| view! { <li>{bucket.range} ": " {bucket.count}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
fn StatsPanel(stats: CompetitionStats) -> impl IntoView {
    view! {
        <div class="stats-panel">
            <div class="stat">
                <span class="stat-value">{stats.total_participants}</span>
                <span class="stat-label">"Participants"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{format_percent(stats.avg_score)}</span>
                <span class="stat-label">"Average"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{format_percent(stats.top_score)}</span>
                <span class="stat-label">"Top score"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{stats.high_scorers}</span>
                <span class="stat-label">"High scorers"</span>
            </div>
            {distribution("Score distribution", stats.score_distribution)}
            {distribution("Experience distribution", stats.experience_distribution)}
        </div>
    }
}

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let scope = mount_scope();
    let entries = RwSignal::new(Loadable::<Vec<LeaderboardEntry>>::Loading);
    let stats = RwSignal::new(Loadable::<CompetitionStats>::Loading);

    let token = scope.token();
    spawn_local(async move {
        let result = client::leaderboard().await;
        token.apply(result, |result| {
            entries.set(Loadable::from_result(result).map(|board| board.leaderboard));
        });
    });

    let token = scope.token();
    spawn_local(async move {
        let result = client::stats().await;
        token.apply(result, |result| stats.set(Loadable::from_result(result)));
    });

    let table = move || {
        entries.with(|entries| match entries.list_view() {
            ListView::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
            ListView::Error(msg) => view! { <p class="error">{msg.to_string()}</p> }.into_any(),
            ListView::Empty => view! { <p class="empty">{LEADERBOARD_EMPTY}</p> }.into_any(),
            ListView::Rows(rows) => view! {
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Participant"</th>
                            <th>"Score"</th>
                            <th>"Skills"</th>
                            <th>"Experience"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .iter()
                            .map(|entry| view! {
                                <tr class=if entry.rank <= 3 { "top-rank" } else { "" }>
                                    {leaderboard_row(entry).into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
            .into_any(),
        })
    };

    view! {
        <div class="card">
            <h2>"Leaderboard"</h2>
            // stats are secondary; a failure here does not hide the table
            {move || stats.with(|s| s.loaded().cloned()).map(|stats| view! { <StatsPanel stats=stats /> })}
            {table}
        </div>
    }
}
