//! Admin portal: item and price management tabs.

use leptos::prelude::*;

use crate::components::admin::{ItemManagement, PriceManagement};
use crate::nav::{navigate, Page};
use crate::state::auth::use_auth_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Items,
    Prices,
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = use_auth_context();
    let (tab, set_tab) = signal(AdminTab::Items);

    let on_sign_out = move |_| {
        auth.sign_out();
        navigate(Page::Home);
    };

    let display_name = move || {
        auth.profile
            .with(|profile| profile.as_ref().map(|p| p.full_name.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <nav class="top-nav">
                <div>
                    <span class="brand">"AgriMarket Admin"</span>
                    <p class="nav-subtitle">{display_name}</p>
                </div>
                <button class="btn-link" on:click=on_sign_out>"Logout"</button>
            </nav>

            <div class="dashboard-body">
                <div class="tab-bar">
                    <button
                        class=move || {
                            if tab.get() == AdminTab::Items { "tab tab-active" } else { "tab" }
                        }
                        on:click=move |_| set_tab.set(AdminTab::Items)
                    >
                        "Item Management"
                    </button>
                    <button
                        class=move || {
                            if tab.get() == AdminTab::Prices { "tab tab-active" } else { "tab" }
                        }
                        on:click=move |_| set_tab.set(AdminTab::Prices)
                    >
                        "Price Management"
                    </button>
                </div>

                <div class="tab-content">
                    {move || match tab.get() {
                        AdminTab::Items => view! { <ItemManagement/> }.into_any(),
                        AdminTab::Prices => view! { <PriceManagement/> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
