//! Farmer portal: price trends, weather advice, and the community forum.

use leptos::prelude::*;

use crate::components::farmer::{CommunityForum, PriceVisualization, WeatherAdvice};
use crate::nav::{navigate, Page};
use crate::state::auth::use_auth_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FarmerTab {
    Prices,
    Weather,
    Forum,
}

impl FarmerTab {
    const ALL: [FarmerTab; 3] = [FarmerTab::Prices, FarmerTab::Weather, FarmerTab::Forum];

    fn label(&self) -> &'static str {
        match self {
            FarmerTab::Prices => "Price Trends",
            FarmerTab::Weather => "Weather & Advice",
            FarmerTab::Forum => "Community Forum",
        }
    }
}

#[component]
pub fn FarmerDashboard() -> impl IntoView {
    let auth = use_auth_context();
    let (tab, set_tab) = signal(FarmerTab::Prices);

    let on_sign_out = move |_| {
        auth.sign_out();
        navigate(Page::Home);
    };

    let display_name = move || {
        auth.profile
            .with(|profile| profile.as_ref().map(|p| p.full_name.clone()))
            .unwrap_or_default()
    };
    let region = move || {
        auth.profile
            .with(|profile| profile.as_ref().and_then(|p| p.region.clone()))
    };

    view! {
        <div class="page page-sidebar">
            <aside class="sidebar">
                <div class="sidebar-brand">
                    <span class="brand">"AgriMarket"</span>
                    <p class="nav-subtitle">"Farmer Portal"</p>
                </div>

                <div class="sidebar-welcome">
                    <p class="nav-subtitle">"Welcome back,"</p>
                    <p class="sidebar-name">{display_name}</p>
                    {move || region().map(|region| view! { <p class="nav-subtitle">{region}</p> })}
                </div>

                <nav class="sidebar-nav">
                    {FarmerTab::ALL
                        .iter()
                        .map(|entry| {
                            let entry = *entry;
                            view! {
                                <button
                                    class=move || {
                                        if tab.get() == entry {
                                            "sidebar-link sidebar-link-active"
                                        } else {
                                            "sidebar-link"
                                        }
                                    }
                                    on:click=move |_| set_tab.set(entry)
                                >
                                    {entry.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="sidebar-footer">
                    <button class="sidebar-link" on:click=on_sign_out>"Logout"</button>
                </div>
            </aside>

            <main class="sidebar-main">
                {move || match tab.get() {
                    FarmerTab::Prices => view! { <PriceVisualization/> }.into_any(),
                    FarmerTab::Weather => view! { <WeatherAdvice/> }.into_any(),
                    FarmerTab::Forum => view! { <CommunityForum/> }.into_any(),
                }}
            </main>
        </div>
    }
}
