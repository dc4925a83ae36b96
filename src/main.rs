use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

mod app;
mod components;
mod config;
mod types;
mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let perf = web_sys::window().and_then(|w| w.performance());
    let t0 = perf.as_ref().map(|p| p.now());
    console::log_1(&"Starting Eventboard frontend: initializing runtime config".into());

    spawn_local(async move {
        config::init().await;
        if let (Some(p), Some(start)) = (perf.as_ref(), t0) {
            let elapsed = p.now() - start;
            console::log_1(&format!("Runtime config initialized ({} ms)", elapsed).into());
        } else {
            console::log_1(&"Runtime config initialized".into());
        }
        mount_to_body(|| {
            view! { <App/> }
        });
    });
}
