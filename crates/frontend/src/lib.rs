#[macro_use]
extern crate rust_i18n;

pub mod app;
pub mod brains;
pub mod chat;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

i18n!("locales");

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    rust_i18n::set_locale("en");

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
