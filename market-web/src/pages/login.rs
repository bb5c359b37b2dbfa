//! Email/password sign-in.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use serde::Deserialize;

use shared::{Credentials, Role};

use crate::nav::{navigate, Page};
use crate::services::remote::client;
use crate::state::auth::use_auth_context;
use crate::utils::events::input_value;

#[derive(Debug, Clone, Deserialize)]
struct RoleRow {
    role: Role,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        leptos::task::spawn_local(async move {
            match client().sign_in_with_password(&credentials).await {
                Ok(session) => {
                    let role = client()
                        .from("profiles")
                        .select("role")
                        .eq("id", session.user.id)
                        .maybe_single::<RoleRow>()
                        .await;
                    auth.establish(session.user).await;
                    match role {
                        Ok(Some(row)) if row.role == Role::Admin => navigate(Page::Admin),
                        Ok(_) => navigate(Page::Farmer),
                        Err(err) => {
                            log::error!("failed to load role: {err}");
                            navigate(Page::Farmer);
                        }
                    }
                }
                Err(err) => {
                    log::error!("login failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page page-auth">
            <div class="auth-card">
                <div class="brand brand-centered">"AgriMarket"</div>

                <h2>"Welcome Back"</h2>
                <p class="section-subtitle">"Login to access your dashboard"</p>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="error-banner">{message}</div> })
                }}

                <form on:submit=on_submit>
                    <label class="form-label">"Email Address"</label>
                    <input
                        type="email"
                        class="form-input"
                        required
                        placeholder="farmer@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(input_value(&ev))
                    />

                    <label class="form-label">"Password"</label>
                    <input
                        type="password"
                        class="form-input"
                        required
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(input_value(&ev))
                    />

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-links">
                    <p>
                        "Don't have an account? "
                        <button class="btn-link" on:click=move |_| navigate(Page::Register)>
                            "Register as Farmer"
                        </button>
                    </p>
                    <button class="btn-link btn-muted" on:click=move |_| navigate(Page::Home)>
                        "Back to Home"
                    </button>
                </div>
            </div>
        </div>
    }
}
