//! My Scores page

use leptos::prelude::*;
use leptos::task::spawn_local;
use perfect_cv_common::format::{format_date, format_percent, format_years, SCORES_EMPTY};
use perfect_cv_common::{ListView, Loadable, ScoreRecord};

use super::mount_scope;
use crate::api::client;
use crate::app::AppContext;

#[component]
pub fn ScoresPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let scope = mount_scope();
    let records = RwSignal::new(Loadable::<Vec<ScoreRecord>>::Loading);
    let best = RwSignal::new(None::<f64>);

    if let Some(participant_id) = ctx.participant_id() {
        let token = scope.token();
        spawn_local(async move {
            let result = client::scores(&participant_id).await;
            token.apply(result, |result| match result {
                Ok(history) => {
                    best.set(history.best_score);
                    records.set(Loadable::Loaded(history.scores));
                }
                Err(e) => records.set(Loadable::Failed(e.to_string())),
            });
        });
    }

    let table = move || {
        records.with(|records| match records.list_view() {
            ListView::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
            ListView::Error(msg) => view! { <p class="error">{msg.to_string()}</p> }.into_any(),
            ListView::Empty => view! { <p class="empty">{SCORES_EMPTY}</p> }.into_any(),
            ListView::Rows(rows) => view! {
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Score"</th>
                            <th>"Skills"</th>
                            <th>"Experience"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .iter()
                            .enumerate()
                            .map(|(index, record)| view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td>{format_percent(record.score)}</td>
                                    <td>{record.skills_count}</td>
                                    <td>{format_years(record.experience_years)}</td>
                                    <td>{record.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
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
            <h2>"My Scores"</h2>
            {move || best.get().map(|score| view! {
                <p class="best-score">"Best Score: " {format_percent(score)}</p>
            })}
            {table}
        </div>
    }
}
