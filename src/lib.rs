// lib.rs - Root module for the fridge_manager library
//
// The web application lives under web_app. With the `hydrate` feature this
// crate is also built as the WASM bundle that hydrates the server-rendered
// pages.

pub mod web_app;

/// WASM entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
