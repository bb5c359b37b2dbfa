//! AgriMarket web frontend.
//!
//! Client-side rendered Leptos app. Everything stateful beyond a component's
//! lifetime lives in the navigation store, the auth context, or the remote
//! store behind the data client.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod analysis;
pub mod app;
pub mod components;
pub mod nav;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AgriMarket starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
