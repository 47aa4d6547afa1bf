//! Register / login page

use gloo::console;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use perfect_cv_common::validation::validate_registration;
use perfect_cv_common::RegisterRequest;

use super::mount_scope;
use crate::api::client;
use crate::app::AppContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let scope = mount_scope();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let (n, e, m) = (name.get_untracked(), email.get_untracked(), mobile.get_untracked());
        if let Err(err) = validate_registration(&n, &e, &m) {
            error.set(Some(err.to_string()));
            return;
        }

        error.set(None);
        loading.set(true);
        let token = scope.token();
        spawn_local(async move {
            let request = RegisterRequest {
                name: n.trim().to_string(),
                email: e.trim().to_string(),
                mobile: m.trim().to_string(),
            };
            let result = client::register(&request).await;
            token.apply(result, |result| {
                loading.set(false);
                match result {
                    Ok(participant) => {
                        if let Some(message) = &participant.message {
                            console::log!(format!("register: {}", message));
                        }
                        if let Err(msg) = ctx.login(&participant) {
                            error.set(Some(msg));
                        }
                    }
                    Err(err) => {
                        console::error!(format!("register: {}", err));
                        error.set(Some(err.to_string()));
                    }
                }
            });
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="card login-card">
            <h2>"Register / Login"</h2>
            <p class="text-muted">"Already registered? Use the same email to continue."</p>

            <form on:submit=on_submit>
                {field("name", "Full name", "text", name)}
                {field("email", "Email", "email", email)}
                {field("mobile", "Mobile number", "tel", mobile)}

                {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "REGISTERING..." } else { "REGISTER / LOGIN" }}
                </button>
            </form>
        </div>
    }
}
