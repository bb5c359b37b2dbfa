//! Regional weather snapshot, market trend digest, and heuristic advice.

use leptos::prelude::*;
use serde::Deserialize;

use shared::format_signed_percent;
use uuid::Uuid;

use crate::analysis::advice::generate_advice;
use crate::analysis::trends::{trend_for, PriceTrend, TrendDirection};
use crate::analysis::weather::{Condition, WeatherReport};
use crate::services::remote::{client, Result};
use crate::state::auth::use_auth_context;
use crate::utils::constants::{HISTORY_DAYS, TREND_ITEM_LIMIT};

#[derive(Debug, Clone, Deserialize)]
struct ItemNameRow {
    id: Uuid,
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PriceValueRow {
    price: f64,
}

/// Classify the recent price movement of up to [`TREND_ITEM_LIMIT`] items.
/// Items with a failed fetch or fewer than two observations are skipped.
async fn analyze_trends() -> Result<Vec<PriceTrend>> {
    let items: Vec<ItemNameRow> = client()
        .from("items")
        .select("id, name")
        .limit(TREND_ITEM_LIMIT)
        .fetch()
        .await?;

    let mut trends = Vec::new();
    for item in items {
        let prices: Vec<PriceValueRow> = match client()
            .from("prices")
            .select("price")
            .eq("item_id", item.id)
            .order("date", false)
            .limit(HISTORY_DAYS)
            .fetch()
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                log::warn!("price fetch failed for {}: {err}", item.name);
                continue;
            }
        };
        let newest_first: Vec<f64> = prices.iter().map(|row| row.price).collect();
        if let Some(trend) = trend_for(&item.name, &newest_first) {
            trends.push(trend);
        }
    }
    Ok(trends)
}

fn condition_glyph(condition: Condition) -> &'static str {
    match condition {
        Condition::Sunny | Condition::Clear => "☀",
        Condition::Rainy => "🌧",
        Condition::PartlyCloudy | Condition::Cloudy => "☁",
    }
}

#[component]
pub fn WeatherAdvice() -> impl IntoView {
    let auth = use_auth_context();
    let report = RwSignal::new(None::<WeatherReport>);
    let trends = RwSignal::new(Vec::<PriceTrend>::new());
    let advice = RwSignal::new(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    leptos::task::spawn_local(async move {
        let sampled = {
            let mut rng = rand::thread_rng();
            WeatherReport::sample(&mut rng)
        };
        let computed = match analyze_trends().await {
            Ok(trends) => trends,
            Err(err) => {
                log::error!("failed to analyze price trends: {err}");
                Vec::new()
            }
        };
        advice.set(generate_advice(&computed, Some(&sampled)));
        report.set(Some(sampled));
        trends.set(computed);
        set_loading.set(false);
    });

    let region = move || {
        auth.profile
            .with(|profile| profile.as_ref().and_then(|p| p.region.clone()))
            .unwrap_or_else(|| "Your Region".to_string())
    };

    view! {
        <div>
            <div class="section-header">
                <div>
                    <h2>"Weather & Smart Advice"</h2>
                    <p class="section-subtitle">
                        "Regional weather updates and data-driven farming recommendations"
                    </p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading-note">"Loading weather and advice..."</p> }
                        .into_any();
                }
                view! {
                    <div class="split-layout">
                        <div class="weather-card">
                            <div class="weather-card-header">
                                <div>
                                    <h3>"Current Weather"</h3>
                                    <p class="section-subtitle">{region()}</p>
                                </div>
                                <span class="weather-glyph">
                                    {move || {
                                        report
                                            .with(|r| r.as_ref().map(|r| condition_glyph(r.condition)))
                                            .unwrap_or("☁")
                                    }}
                                </span>
                            </div>

                            {move || {
                                report
                                    .get()
                                    .map(|weather| {
                                        view! {
                                            <div class="weather-rows">
                                                <div class="weather-row">
                                                    <span>"Temperature"</span>
                                                    <strong>{format!("{}°C", weather.temperature_c)}</strong>
                                                </div>
                                                <div class="weather-row">
                                                    <span>"Humidity"</span>
                                                    <strong>{format!("{}%", weather.humidity_pct)}</strong>
                                                </div>
                                                <div class="weather-row">
                                                    <span>"Wind Speed"</span>
                                                    <strong>{format!("{} km/h", weather.wind_kmh)}</strong>
                                                </div>
                                                <div class="weather-row">
                                                    <span>"Precipitation"</span>
                                                    <strong>
                                                        {format!("{}%", weather.precipitation_pct)}
                                                    </strong>
                                                </div>
                                                <div class="weather-condition">
                                                    <p>"Condition"</p>
                                                    <strong>{weather.condition.label()}</strong>
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </div>

                        <div class="trend-card">
                            <h3>"Market Trends (7 Days)"</h3>
                            {move || {
                                let rows = trends.get();
                                if rows.is_empty() {
                                    return view! {
                                        <p class="empty-row">"No price data available"</p>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .take(6)
                                    .map(|trend| {
                                        let class = match trend.direction {
                                            TrendDirection::Rising => "trend-change trend-up",
                                            TrendDirection::Falling => "trend-change trend-down",
                                            TrendDirection::Stable => "trend-change",
                                        };
                                        view! {
                                            <div class="trend-row">
                                                <span class="trend-item">
                                                    {trend.item.clone()}
                                                    <small>{trend.direction.label()}</small>
                                                </span>
                                                <span class=class>
                                                    {format_signed_percent(trend.change_pct)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }}

            <div class="advice-card">
                <h3>"Smart Farming Advice"</h3>
                {move || {
                    advice
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, line)| {
                            view! {
                                <div class="advice-row">
                                    <span class="advice-index">{index + 1}</span>
                                    <p>{line}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <div class="note-box">
                    <strong>"Note: "</strong>
                    "These recommendations are based on current weather data and market trends. "
                    "Always consult with local agricultural experts for critical decisions."
                </div>
            </div>
        </div>
    }
}
