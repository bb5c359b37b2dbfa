//! Admin price management: daily market rates per item.

use chrono::{Days, NaiveDate, Utc};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use rand::Rng;

use shared::{format_rupees, Item, Price, PricePayload};
use uuid::Uuid;

use crate::services::remote::{client, Result};
use crate::utils::constants::{HISTORY_DAYS, RECENT_PRICE_LIMIT};
use crate::utils::dialog::{alert, confirm};
use crate::utils::events::input_value;
use crate::utils::format::medium_date;

#[derive(Clone)]
struct PriceForm {
    item_id: String,
    price: String,
    date: String,
}

impl PriceForm {
    fn empty() -> Self {
        Self {
            item_id: String::new(),
            price: String::new(),
            date: Utc::now().date_naive().to_string(),
        }
    }
}

async fn load_data() -> (Result<Vec<Item>>, Result<Vec<Price>>) {
    futures::join!(
        client().from("items").select("*").order("name", true).fetch::<Item>(),
        client()
            .from("prices")
            .select("*, items(*)")
            .order("date", false)
            .limit(RECENT_PRICE_LIMIT)
            .fetch::<Price>(),
    )
}

/// 7 days of synthetic observations per item: an integer base in 50..150 with
/// a ±10 variance, floored at 20 and rounded to the paisa.
fn mock_prices(items: &[Item], today: NaiveDate, rng: &mut impl Rng) -> Vec<PricePayload> {
    let mut rows = Vec::new();
    for item in items {
        let base = rng.gen_range(50..150) as f64;
        for offset in 0..HISTORY_DAYS {
            let date = today - Days::new(offset as u64);
            let variance = rng.gen_range(-10.0..10.0);
            let price = ((base + variance).max(20.0) * 100.0).round() / 100.0;
            rows.push(PricePayload {
                item_id: item.id,
                price,
                date,
            });
        }
    }
    rows
}

#[component]
pub fn PriceManagement() -> impl IntoView {
    let items = RwSignal::new(Vec::<Item>::new());
    let prices = RwSignal::new(Vec::<Price>::new());
    let (loading, set_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let editing = RwSignal::new(None::<Price>);
    let form = RwSignal::new(PriceForm::empty());

    let load = move || {
        leptos::task::spawn_local(async move {
            let (items_res, prices_res) = load_data().await;
            match items_res {
                Ok(rows) => items.set(rows),
                Err(err) => log::error!("failed to load items: {err}"),
            }
            match prices_res {
                Ok(rows) => prices.set(rows),
                Err(err) => log::error!("failed to load prices: {err}"),
            }
            set_loading.set(false);
        });
    };
    load();

    let close_modal = move || {
        set_show_modal.set(false);
        editing.set(None);
        form.set(PriceForm::empty());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form_data = form.get();
        let Ok(item_id) = Uuid::parse_str(form_data.item_id.trim()) else {
            alert("Select an item");
            return;
        };
        let Ok(price) = form_data.price.trim().parse::<f64>() else {
            alert("Enter a valid price");
            return;
        };
        let Ok(date) = form_data.date.parse::<NaiveDate>() else {
            alert("Enter a valid date");
            return;
        };
        let payload = PricePayload {
            item_id,
            price,
            date,
        };
        let current = editing.get();
        leptos::task::spawn_local(async move {
            let result = match &current {
                Some(row) => client().from("prices").eq("id", row.id).update(&payload).await,
                None => client().from("prices").insert(&payload).await,
            };
            match result {
                Ok(()) => {
                    close_modal();
                    load();
                }
                Err(err) => {
                    log::error!("failed to save price: {err}");
                    alert("Failed to save price");
                }
            }
        });
    };

    let on_edit = move |price: Price| {
        form.set(PriceForm {
            item_id: price.item_id.to_string(),
            price: price.price.to_string(),
            date: price.date.to_string(),
        });
        editing.set(Some(price));
        set_show_modal.set(true);
    };

    let on_delete = move |id: Uuid| {
        if !confirm("Are you sure you want to delete this price record?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match client().from("prices").eq("id", id).delete().await {
                Ok(()) => load(),
                Err(err) => {
                    log::error!("failed to delete price: {err}");
                    alert("Failed to delete price");
                }
            }
        });
    };

    let on_generate = move |_| {
        if !confirm("Generate 7 days of mock price data for all items?") {
            return;
        }
        let current_items = items.get();
        leptos::task::spawn_local(async move {
            let today = Utc::now().date_naive();
            let rows = {
                let mut rng = rand::thread_rng();
                mock_prices(&current_items, today, &mut rng)
            };
            match client().from("prices").insert(&rows).await {
                Ok(()) => {
                    load();
                    alert("Mock prices generated successfully!");
                }
                Err(err) => {
                    log::error!("failed to generate mock prices: {err}");
                    alert("Failed to generate mock prices");
                }
            }
        });
    };

    view! {
        <div>
            <div class="section-header">
                <div>
                    <h2>"Price Management"</h2>
                    <p class="section-subtitle">"Manage daily market rates for items"</p>
                </div>
                <div class="button-row">
                    <button class="btn" on:click=on_generate>"Generate Mock Data"</button>
                    <button class="btn btn-primary" on:click=move |_| set_show_modal.set(true)>
                        "Add Price"
                    </button>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading-note">"Loading prices..."</p> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Item"</th>
                                <th>"Price (PKR/kg)"</th>
                                <th>"Date"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = prices.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="empty-row">
                                                "No prices found. Add price records or generate mock data."
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|price| {
                                            let item_name = price
                                                .items
                                                .as_ref()
                                                .map(|item| item.name.clone())
                                                .unwrap_or_default();
                                            let edit_price = price.clone();
                                            let price_id = price.id;
                                            view! {
                                                <tr>
                                                    <td>{item_name}</td>
                                                    <td>{format_rupees(price.price)}</td>
                                                    <td>{medium_date(price.date)}</td>
                                                    <td class="actions">
                                                        <button
                                                            class="btn-link"
                                                            on:click=move |_| on_edit(edit_price.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn-link btn-danger"
                                                            on:click=move |_| on_delete(price_id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            {move || {
                show_modal.get().then(|| {
                    view! {
                        <div class="modal-overlay">
                            <div class="modal">
                                <div class="modal-header">
                                    <h3>
                                        {move || {
                                            if editing.with(|e| e.is_some()) { "Edit Price" } else { "Add New Price" }
                                        }}
                                    </h3>
                                    <button class="btn-close" on:click=move |_| close_modal()>"×"</button>
                                </div>
                                <form on:submit=on_submit>
                                    <label class="form-label">"Item"</label>
                                    <select
                                        class="form-input"
                                        required
                                        prop:value=move || form.with(|f| f.item_id.clone())
                                        on:change=move |ev| {
                                            let value = input_value(&ev);
                                            form.update(|f| f.item_id = value);
                                        }
                                    >
                                        <option value="">"Select an item"</option>
                                        {move || {
                                            items
                                                .get()
                                                .into_iter()
                                                .map(|item| {
                                                    view! {
                                                        <option value=item.id.to_string()>{item.name}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </select>

                                    <label class="form-label">"Price (PKR per kg)"</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0"
                                        class="form-input"
                                        required
                                        placeholder="e.g., 150.00"
                                        prop:value=move || form.with(|f| f.price.clone())
                                        on:input=move |ev| {
                                            let value = input_value(&ev);
                                            form.update(|f| f.price = value);
                                        }
                                    />

                                    <label class="form-label">"Date"</label>
                                    <input
                                        type="date"
                                        class="form-input"
                                        required
                                        prop:value=move || form.with(|f| f.date.clone())
                                        on:input=move |ev| {
                                            let value = input_value(&ev);
                                            form.update(|f| f.date = value);
                                        }
                                    />

                                    <div class="modal-actions">
                                        <button type="button" class="btn" on:click=move |_| close_modal()>
                                            "Cancel"
                                        </button>
                                        <button type="submit" class="btn btn-primary">
                                            {move || {
                                                if editing.with(|e| e.is_some()) { "Update" } else { "Create" }
                                            }}
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::Category;

    fn item(seed: u128, name: &str) -> Item {
        Item {
            id: Uuid::from_u128(seed),
            name: name.to_string(),
            category: Category::Vegetable,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn mock_prices_cover_the_window_per_item() {
        let items = vec![item(1, "Tomato"), item(2, "Onion")];
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let rows = mock_prices(&items, today, &mut rng);
        assert_eq!(rows.len(), items.len() * HISTORY_DAYS);

        let tomato_rows: Vec<_> = rows.iter().filter(|r| r.item_id == items[0].id).collect();
        let mut dates: Vec<_> = tomato_rows.iter().map(|r| r.date).collect();
        dates.sort();
        assert_eq!(dates.first().copied(), today.checked_sub_days(Days::new(6)));
        assert_eq!(dates.last().copied(), Some(today));
    }

    #[test]
    fn mock_prices_respect_the_floor() {
        let items = vec![item(3, "Chili")];
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for row in mock_prices(&items, today, &mut rng) {
            assert!(row.price >= 20.0);
        }
    }
}
