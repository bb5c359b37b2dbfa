//! Price trend charts: single-item history and up-to-three-item comparison.

use futures::future::join_all;
use leptos::prelude::*;

use shared::{format_rupees, format_signed_percent, Item, PricePoint};
use uuid::Uuid;

use crate::components::chart::{LineChart, Series};
use crate::services::remote::{client, Result};
use crate::utils::constants::{COMPARE_LIMIT, HISTORY_DAYS};
use crate::utils::events::input_value;
use crate::utils::format::short_date;

#[derive(Clone, PartialEq)]
struct ItemWithPrice {
    item: Item,
    latest_price: Option<f64>,
}

/// Toggle `item_id` in the compare selection. Adding past the cap is a no-op;
/// toggling a selected item removes it.
fn toggle_compare_selection(mut selected: Vec<Uuid>, item_id: Uuid, cap: usize) -> Vec<Uuid> {
    if let Some(position) = selected.iter().position(|id| *id == item_id) {
        selected.remove(position);
    } else if selected.len() < cap {
        selected.push(item_id);
    }
    selected
}

async fn load_items_with_prices() -> Result<Vec<ItemWithPrice>> {
    let items: Vec<Item> = client()
        .from("items")
        .select("*")
        .order("name", true)
        .fetch()
        .await?;

    let latest = join_all(items.iter().map(|item| {
        let item_id = item.id;
        async move {
            client()
                .from("prices")
                .select("date, price")
                .eq("item_id", item_id)
                .order("date", false)
                .maybe_single::<PricePoint>()
                .await
        }
    }))
    .await;

    Ok(items
        .into_iter()
        .zip(latest)
        .map(|(item, point)| {
            let latest_price = match point {
                Ok(point) => point.map(|p| p.price),
                Err(err) => {
                    log::warn!("latest price fetch failed for {}: {err}", item.name);
                    None
                }
            };
            ItemWithPrice { item, latest_price }
        })
        .collect())
}

async fn load_history(item_id: Uuid) -> Result<Vec<PricePoint>> {
    client()
        .from("prices")
        .select("date, price")
        .eq("item_id", item_id)
        .order("date", true)
        .limit(HISTORY_DAYS)
        .fetch()
        .await
}

#[component]
pub fn PriceVisualization() -> impl IntoView {
    let items = RwSignal::new(Vec::<ItemWithPrice>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let selected = RwSignal::new(None::<Uuid>);
    let history = RwSignal::new(Vec::<PricePoint>::new());
    let (compare_mode, set_compare_mode) = signal(false);
    let compare_items = RwSignal::new(Vec::<Uuid>::new());
    let compare_histories = RwSignal::new(Vec::<(Uuid, Vec<PricePoint>)>::new());

    leptos::task::spawn_local(async move {
        match load_items_with_prices().await {
            Ok(rows) => items.set(rows),
            Err(err) => log::error!("failed to load items: {err}"),
        }
        set_loading.set(false);
    });

    let on_select = move |item_id: Uuid| {
        if compare_mode.get() {
            let selection = toggle_compare_selection(compare_items.get(), item_id, COMPARE_LIMIT);
            compare_items.set(selection.clone());
            if selection.is_empty() {
                compare_histories.set(Vec::new());
                return;
            }
            leptos::task::spawn_local(async move {
                let mut histories = Vec::new();
                for id in selection {
                    match load_history(id).await {
                        Ok(points) => histories.push((id, points)),
                        Err(err) => log::error!("failed to load compare history: {err}"),
                    }
                }
                compare_histories.set(histories);
            });
        } else {
            selected.set(Some(item_id));
            leptos::task::spawn_local(async move {
                match load_history(item_id).await {
                    Ok(points) => history.set(points),
                    Err(err) => log::error!("failed to load price history: {err}"),
                }
            });
        }
    };

    let on_toggle_compare = move |_| {
        set_compare_mode.set(!compare_mode.get());
        compare_items.set(Vec::new());
        compare_histories.set(Vec::new());
        selected.set(None);
        history.set(Vec::new());
    };

    let item_name = move |item_id: Uuid| {
        items.with(|rows| {
            rows.iter()
                .find(|row| row.item.id == item_id)
                .map(|row| row.item.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div>
            <div class="section-header">
                <div>
                    <h2>"Price Trends & Analysis"</h2>
                    <p class="section-subtitle">"Track market rates and 7-day price trends"</p>
                </div>
                <button
                    class=move || {
                        if compare_mode.get() { "btn btn-primary" } else { "btn" }
                    }
                    on:click=on_toggle_compare
                >
                    {move || if compare_mode.get() { "Exit Compare" } else { "Compare Items" }}
                </button>
            </div>

            {move || {
                compare_mode.get().then(|| {
                    view! {
                        <div class="hint-box">
                            <strong>"Compare Mode: "</strong>
                            "Select up to 3 items to compare their 7-day price trends. Selected: "
                            {move || compare_items.with(|c| c.len())}
                            "/3"
                        </div>
                    }
                })
            }}

            {move || {
                if loading.get() {
                    return view! { <p class="loading-note">"Loading prices..."</p> }.into_any();
                }
                view! {
                    <div class="split-layout">
                        <div class="item-panel">
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Search items..."
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(input_value(&ev))
                            />

                            <div class="item-list">
                                {move || {
                                    let term = search.get().to_lowercase();
                                    let rows: Vec<ItemWithPrice> = items
                                        .get()
                                        .into_iter()
                                        .filter(|row| row.item.name.to_lowercase().contains(&term))
                                        .collect();
                                    if rows.is_empty() {
                                        return view! { <p class="empty-row">"No items found"</p> }
                                            .into_any();
                                    }
                                    rows.into_iter()
                                        .map(|row| {
                                            let item_id = row.item.id;
                                            let is_selected = move || {
                                                if compare_mode.get() {
                                                    compare_items.with(|c| c.contains(&item_id))
                                                } else {
                                                    selected.get() == Some(item_id)
                                                }
                                            };
                                            view! {
                                                <button
                                                    class=move || {
                                                        if is_selected() {
                                                            "item-row item-row-selected"
                                                        } else {
                                                            "item-row"
                                                        }
                                                    }
                                                    on:click=move |_| on_select(item_id)
                                                >
                                                    <span class="item-row-name">
                                                        {row.item.name.clone()}
                                                        <small>{row.item.category.label()}</small>
                                                    </span>
                                                    {row
                                                        .latest_price
                                                        .map(|price| {
                                                            view! {
                                                                <span class="item-row-price">
                                                                    {format_rupees(price)}
                                                                    <small>"Latest"</small>
                                                                </span>
                                                            }
                                                        })}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </div>
                        </div>

                        <div class="chart-panel">
                            {move || {
                                if compare_mode.get() {
                                    let selection = compare_items.get();
                                    if selection.is_empty() {
                                        return view! {
                                            <div class="placeholder">
                                                <h3>"Compare Multiple Items"</h3>
                                                <p>"Select 2-3 items from the list to compare their price trends"</p>
                                            </div>
                                        }
                                        .into_any();
                                    }
                                    let histories = compare_histories.get();
                                    let labels: Vec<String> = histories
                                        .first()
                                        .map(|(_, points)| {
                                            points.iter().map(|p| short_date(p.date)).collect()
                                        })
                                        .unwrap_or_default();
                                    let series: Vec<Series> = histories
                                        .iter()
                                        .map(|(id, points)| Series {
                                            label: item_name(*id),
                                            values: points.iter().map(|p| p.price).collect(),
                                        })
                                        .collect();
                                    view! {
                                        <div>
                                            <h3>
                                                {format!("Price Comparison: {} Items", selection.len())}
                                            </h3>
                                            <LineChart series=series labels=labels/>
                                        </div>
                                    }
                                    .into_any()
                                } else if let Some(item_id) = selected.get() {
                                    let points = history.get();
                                    if points.is_empty() {
                                        return view! {
                                            <div class="placeholder">
                                                <h3>"No price history"</h3>
                                                <p>"No observations recorded for this item yet"</p>
                                            </div>
                                        }
                                        .into_any();
                                    }
                                    let labels: Vec<String> =
                                        points.iter().map(|p| short_date(p.date)).collect();
                                    let values: Vec<f64> = points.iter().map(|p| p.price).collect();
                                    let current = values.last().copied().unwrap_or(0.0);
                                    let first = values.first().copied().unwrap_or(0.0);
                                    let average = values.iter().sum::<f64>() / values.len() as f64;
                                    let change_pct = if first != 0.0 {
                                        (current - first) / first * 100.0
                                    } else {
                                        0.0
                                    };
                                    view! {
                                        <div>
                                            <h3>
                                                {format!("7-Day Price Trend: {}", item_name(item_id))}
                                            </h3>
                                            <LineChart
                                                series=vec![Series {
                                                    label: "Price (PKR/kg)".to_string(),
                                                    values,
                                                }]
                                                labels=labels
                                            />
                                            <div class="stat-grid">
                                                <div class="stat-card">
                                                    <p class="stat-label">"Current Price"</p>
                                                    <p class="stat-value">{format_rupees(current)}</p>
                                                </div>
                                                <div class="stat-card">
                                                    <p class="stat-label">"Average Price"</p>
                                                    <p class="stat-value">{format_rupees(average)}</p>
                                                </div>
                                                <div class="stat-card">
                                                    <p class="stat-label">"Price Change"</p>
                                                    <p class=move || {
                                                        if change_pct >= 0.0 {
                                                            "stat-value stat-up"
                                                        } else {
                                                            "stat-value stat-down"
                                                        }
                                                    }>
                                                        {format_signed_percent(change_pct)}
                                                    </p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="placeholder">
                                            <h3>"Select an Item to View Trends"</h3>
                                            <p>"Choose any vegetable or fruit to see its 7-day price trend"</p>
                                        </div>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(seed: u128) -> Uuid {
        Uuid::from_u128(seed)
    }

    #[test]
    fn selection_grows_until_the_cap() {
        let mut selection = Vec::new();
        for seed in 1..=3 {
            selection = toggle_compare_selection(selection, id(seed), COMPARE_LIMIT);
        }
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn fourth_item_is_a_no_op() {
        let selection = vec![id(1), id(2), id(3)];
        let after = toggle_compare_selection(selection.clone(), id(4), COMPARE_LIMIT);
        assert_eq!(after, selection);
    }

    #[test]
    fn toggling_a_selected_item_removes_it() {
        let selection = vec![id(1), id(2), id(3)];
        let after = toggle_compare_selection(selection, id(2), COMPARE_LIMIT);
        assert_eq!(after, vec![id(1), id(3)]);
    }

    #[test]
    fn removal_makes_room_for_a_new_item() {
        let selection = vec![id(1), id(2), id(3)];
        let after = toggle_compare_selection(selection, id(3), COMPARE_LIMIT);
        let after = toggle_compare_selection(after, id(4), COMPARE_LIMIT);
        assert_eq!(after, vec![id(1), id(2), id(4)]);
    }
}
