//! Home page: upload a resume and see its score

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use perfect_cv_common::format::welcome_line;
use perfect_cv_common::{Page, UploadFlow};

use super::mount_scope;
use crate::api::client;
use crate::app::AppContext;
use crate::components::score_card::ScoreCard;
use crate::components::upload_area::UploadArea;
use crate::file::BrowserFile;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let scope = mount_scope();
    let flow = RwSignal::new_local(UploadFlow::<BrowserFile>::new());

    if let Some(participant_id) = ctx.participant_id() {
        let token = scope.token();
        spawn_local(async move {
            match client::upload_count(&participant_id).await {
                Ok(count) => {
                    token.apply(count, |count| flow.update(|f| f.set_upload_count(count.upload_count)));
                }
                Err(e) => console::warn!(format!("upload count: {}", e)),
            }
        });
    }

    let on_submit = move |_| {
        let Some(participant_id) = ctx.participant_id() else {
            ctx.navigate(Page::Login);
            return;
        };

        let mut outcome = None;
        flow.update(|f| outcome = Some(f.begin_submit()));
        let Some(Ok(submission)) = outcome else {
            return;
        };

        let token = scope.token();
        spawn_local(async move {
            let result = client::submit(
                &participant_id,
                submission.file.as_file(),
                &submission.job_description,
                &submission.education,
            )
            .await;
            let refreshed = match &result {
                Ok(_) => client::upload_count(&participant_id).await.ok(),
                Err(_) => None,
            };

            token.apply((result, refreshed), |(result, refreshed)| {
                flow.update(|f| match result {
                    Ok(score) => {
                        f.finish_success(score);
                        if let Some(count) = refreshed {
                            f.set_upload_count(count.upload_count);
                        }
                    }
                    Err(e) => f.finish_failure(e.to_string()),
                })
            });
        });
    };

    let welcome = move || {
        let name = ctx.participant().map(|p| p.name).unwrap_or_default();
        welcome_line(&name, flow.with(|f| f.upload_count()))
    };

    view! {
        <div class="card">
            <h2>{welcome}</h2>
            {move || ctx.notice().map(|msg| view! { <p class="success">{msg}</p> })}

            <UploadArea flow=flow />

            <div class="form-group">
                <label for="job-description">"Job description"</label>
                <textarea
                    id="job-description"
                    rows="6"
                    placeholder="Paste the job description (at least 50 characters)"
                    prop:value=move || flow.with(|f| f.job_description().to_string())
                    on:input=move |ev| flow.update(|f| f.set_job_description(event_target_value(&ev)))
                ></textarea>
            </div>

            <div class="form-group">
                <label for="education">"Required education (optional)"</label>
                <input
                    type="text"
                    id="education"
                    placeholder="e.g. B.Tech in Computer Science"
                    prop:value=move || flow.with(|f| f.education().to_string())
                    on:input=move |ev| flow.update(|f| f.set_education(event_target_value(&ev)))
                />
            </div>

            {move || flow.with(|f| f.error().map(|msg| view! { <p class="error">{msg.to_string()}</p> }))}
            {move || flow.with(|f| f.success().map(|msg| view! { <p class="success">{msg.to_string()}</p> }))}

            <button
                class="btn btn-primary"
                disabled=move || flow.with(|f| !f.can_submit())
                on:click=on_submit
            >
                {move || {
                    if flow.with(|f| f.is_submitting()) {
                        "ANALYZING..."
                    } else if flow.with(|f| f.quota_reached()) {
                        "UPLOAD LIMIT REACHED"
                    } else {
                        "SUBMIT RESUME"
                    }
                }}
            </button>
        </div>

        {move || flow.with(|f| f.result().cloned()).map(|result| view! { <ScoreCard result=result /> })}
    }
}
