//! Farmer registration: account signup plus the profile row.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{NewProfile, Role, SignupRequest};

use crate::nav::{navigate, Page};
use crate::services::remote::client;
use crate::state::auth::use_auth_context;
use crate::utils::constants::REGIONS;
use crate::utils::events::input_value;

#[derive(Clone, Default)]
struct RegisterForm {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
    region: String,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth_context();
    let form = RwSignal::new(RegisterForm::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let form_data = form.get();
        if form_data.password != form_data.confirm_password {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        if form_data.password.len() < 6 {
            set_error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }

        set_loading.set(true);
        leptos::task::spawn_local(async move {
            let request = SignupRequest {
                email: form_data.email.clone(),
                password: form_data.password.clone(),
            };
            match client().sign_up(&request).await {
                Ok(session) => {
                    let profile = NewProfile {
                        id: session.user.id,
                        email: form_data.email.clone(),
                        full_name: form_data.full_name.clone(),
                        role: Role::Farmer,
                        region: if form_data.region.is_empty() {
                            None
                        } else {
                            Some(form_data.region.clone())
                        },
                    };
                    match client().from("profiles").insert(&profile).await {
                        Ok(()) => {
                            auth.establish(session.user).await;
                            navigate(Page::Farmer);
                        }
                        Err(err) => {
                            log::error!("profile insert failed: {err}");
                            set_error.set(Some(err.to_string()));
                        }
                    }
                }
                Err(err) => {
                    log::error!("registration failed: {err}");
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

                <h2>"Register as Farmer"</h2>
                <p class="section-subtitle">"Join our community of smart farmers"</p>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="error-banner">{message}</div> })
                }}

                <form on:submit=on_submit>
                    <label class="form-label">"Full Name"</label>
                    <input
                        type="text"
                        class="form-input"
                        required
                        placeholder="Ahmed Khan"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            form.update(|f| f.full_name = value);
                        }
                    />

                    <label class="form-label">"Email Address"</label>
                    <input
                        type="email"
                        class="form-input"
                        required
                        placeholder="farmer@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />

                    <label class="form-label">"Region / City (Optional)"</label>
                    <select
                        class="form-input"
                        prop:value=move || form.with(|f| f.region.clone())
                        on:change=move |ev| {
                            let value = input_value(&ev);
                            form.update(|f| f.region = value);
                        }
                    >
                        <option value="">"Select your region"</option>
                        {REGIONS
                            .iter()
                            .map(|region| view! { <option value=*region>{*region}</option> })
                            .collect::<Vec<_>>()}
                    </select>

                    <label class="form-label">"Password"</label>
                    <input
                        type="password"
                        class="form-input"
                        required
                        placeholder="At least 6 characters"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />

                    <label class="form-label">"Confirm Password"</label>
                    <input
                        type="password"
                        class="form-input"
                        required
                        placeholder="Confirm your password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            form.update(|f| f.confirm_password = value);
                        }
                    />

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <div class="auth-links">
                    <p>
                        "Already have an account? "
                        <button class="btn-link" on:click=move |_| navigate(Page::Login)>
                            "Login"
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
