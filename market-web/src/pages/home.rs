//! Public landing page.

use leptos::prelude::*;

use crate::nav::{navigate, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-landing">
            <nav class="top-nav">
                <span class="brand">"AgriMarket"</span>
                <div class="button-row">
                    <button class="btn-link" on:click=move |_| navigate(Page::Login)>
                        "Login"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| navigate(Page::Register)>
                        "Register"
                    </button>
                </div>
            </nav>

            <main class="landing-main">
                <div class="landing-hero">
                    <h1>"Smart Agriculture Market Tracker"</h1>
                    <p>
                        "Empowering farmers with real-time market prices, weather updates, and "
                        "intelligent farming advice to maximize profits and reduce risks."
                    </p>
                </div>

                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>"Price Trends"</h3>
                        <p>"Track daily market rates and 7-day price trends for vegetables and fruits"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Weather Updates"</h3>
                        <p>"Get region-specific weather forecasts to plan your farming activities"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Smart Advice"</h3>
                        <p>"Receive data-driven recommendations based on market trends and weather"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Community Forum"</h3>
                        <p>"Connect with fellow farmers to share knowledge and experiences"</p>
                    </div>
                </div>

                <div class="landing-cta">
                    <h2>"Ready to Get Started?"</h2>
                    <p>
                        "Join thousands of farmers who are already using AgriMarket to make "
                        "informed decisions and increase their income."
                    </p>
                    <button class="btn btn-primary" on:click=move |_| navigate(Page::Register)>
                        "Register as Farmer"
                    </button>
                </div>
            </main>

            <footer class="landing-footer">
                <p>"© 2025 AgriMarket. Empowering farmers with technology."</p>
            </footer>
        </div>
    }
}
