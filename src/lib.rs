use leptos::*;
use web_sys::console;

mod app;
pub mod components;
pub mod config;
pub mod types;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use app::App;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting Eventboard frontend (wasm)".into());

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__EVENTBOARD_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| view! { <App/> });
}
