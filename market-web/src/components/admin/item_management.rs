//! Admin item management: the commodity catalogue behind every price row.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{Category, Item, ItemPayload};
use uuid::Uuid;

use crate::services::remote::{client, Result};
use crate::utils::dialog::{alert, confirm};
use crate::utils::events::input_value;
use crate::utils::format::medium_date;

#[derive(Clone)]
struct ItemForm {
    name: String,
    category: Category,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Vegetable,
        }
    }
}

async fn load_items() -> Result<Vec<Item>> {
    client()
        .from("items")
        .select("*")
        .order("name", true)
        .fetch()
        .await
}

#[component]
pub fn ItemManagement() -> impl IntoView {
    let items = RwSignal::new(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let editing = RwSignal::new(None::<Item>);
    let form = RwSignal::new(ItemForm::default());

    let load = move || {
        leptos::task::spawn_local(async move {
            match load_items().await {
                Ok(rows) => items.set(rows),
                Err(err) => log::error!("failed to load items: {err}"),
            }
            set_loading.set(false);
        });
    };
    load();

    let close_modal = move || {
        set_show_modal.set(false);
        editing.set(None);
        form.set(ItemForm::default());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = form.with(|f| ItemPayload {
            name: f.name.trim().to_string(),
            category: f.category,
        });
        if payload.name.is_empty() {
            return;
        }
        let current = editing.get();
        leptos::task::spawn_local(async move {
            let result = match &current {
                Some(item) => client().from("items").eq("id", item.id).update(&payload).await,
                None => client().from("items").insert(&payload).await,
            };
            match result {
                Ok(()) => {
                    close_modal();
                    load();
                }
                Err(err) => {
                    log::error!("failed to save item: {err}");
                    alert("Failed to save item");
                }
            }
        });
    };

    let on_edit = move |item: Item| {
        form.set(ItemForm {
            name: item.name.clone(),
            category: item.category,
        });
        editing.set(Some(item));
        set_show_modal.set(true);
    };

    let on_delete = move |id: Uuid| {
        if !confirm("Are you sure you want to delete this item?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match client().from("items").eq("id", id).delete().await {
                Ok(()) => load(),
                Err(err) => {
                    log::error!("failed to delete item: {err}");
                    alert("Failed to delete item");
                }
            }
        });
    };

    view! {
        <div>
            <div class="section-header">
                <div>
                    <h2>"Item Management"</h2>
                    <p class="section-subtitle">"Manage the vegetables and fruits tracked by the market"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_modal.set(true)>
                    "Add Item"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading-note">"Loading items..."</p> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Added"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="empty-row">
                                                "No items yet. Add the first commodity."
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|item| {
                                            let edit_item = item.clone();
                                            let item_id = item.id;
                                            view! {
                                                <tr>
                                                    <td>{item.name.clone()}</td>
                                                    <td>{item.category.label()}</td>
                                                    <td>{medium_date(item.created_at.date_naive())}</td>
                                                    <td class="actions">
                                                        <button
                                                            class="btn-link"
                                                            on:click=move |_| on_edit(edit_item.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn-link btn-danger"
                                                            on:click=move |_| on_delete(item_id)
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
                                            if editing.with(|e| e.is_some()) { "Edit Item" } else { "Add New Item" }
                                        }}
                                    </h3>
                                    <button class="btn-close" on:click=move |_| close_modal()>"×"</button>
                                </div>
                                <form on:submit=on_submit>
                                    <label class="form-label">"Name"</label>
                                    <input
                                        type="text"
                                        class="form-input"
                                        required
                                        placeholder="e.g., Tomato"
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| {
                                            let value = input_value(&ev);
                                            form.update(|f| f.name = value);
                                        }
                                    />

                                    <label class="form-label">"Category"</label>
                                    <select
                                        class="form-input"
                                        required
                                        prop:value=move || form.with(|f| f.category.as_str().to_string())
                                        on:change=move |ev| {
                                            let value = input_value(&ev);
                                            form.update(|f| {
                                                f.category = if value == "fruit" {
                                                    Category::Fruit
                                                } else {
                                                    Category::Vegetable
                                                };
                                            });
                                        }
                                    >
                                        {Category::ALL
                                            .iter()
                                            .map(|category| {
                                                view! {
                                                    <option value=category.as_str()>{category.label()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>

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
