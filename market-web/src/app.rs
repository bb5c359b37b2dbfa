//! Application shell: auth provisioning, role gating, page switching.

use leptos::prelude::*;

use shared::Role;

use crate::nav::{navigate, use_page, Page};
use crate::pages::{AdminDashboard, FarmerDashboard, HomePage, LoginPage, RegisterPage};
use crate::state::auth::provide_auth_context;

#[component]
pub fn App() -> impl IntoView {
    let auth = provide_auth_context();
    let page = use_page();

    // Role gate re-checked on every navigation. The redirect runs after
    // render, so a restricted page's fallback can flash before the profile
    // has loaded; the effect then corrects the page.
    Effect::new(move |_| {
        let current = page.get();
        let loading = auth.loading.get();
        let has_user = auth.user.with(|user| user.is_some());
        let role = auth.profile.with(|profile| profile.as_ref().map(|p| p.role));
        if loading {
            return;
        }
        if has_user {
            match role {
                Some(Role::Admin) if current != Page::Admin => navigate(Page::Admin),
                Some(Role::Farmer) if current != Page::Farmer => navigate(Page::Farmer),
                _ => {}
            }
        } else if matches!(current, Page::Admin | Page::Farmer) {
            navigate(Page::Home);
        }
    });

    view! {
        {move || {
            if auth.loading.get() {
                return view! { <LoadingScreen/> }.into_any();
            }
            let has_user = auth.user.with(|user| user.is_some());
            let role = auth.profile.with(|profile| profile.as_ref().map(|p| p.role));
            match page.get() {
                Page::Login => view! { <LoginPage/> }.into_any(),
                Page::Register => view! { <RegisterPage/> }.into_any(),
                Page::Admin => {
                    if has_user && role == Some(Role::Admin) {
                        view! { <AdminDashboard/> }.into_any()
                    } else {
                        view! { <LoginPage/> }.into_any()
                    }
                }
                Page::Farmer => {
                    if has_user && role == Some(Role::Farmer) {
                        view! { <FarmerDashboard/> }.into_any()
                    } else {
                        view! { <LoginPage/> }.into_any()
                    }
                }
                Page::Home => view! { <HomePage/> }.into_any(),
            }
        }}
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
