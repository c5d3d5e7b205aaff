use leptos::*;

mod components;
pub mod config;
pub mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::login::LoginPage;

/// Installs logging and runtime config, then mounts the login page.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();

    let (runtime_config, problem) = config::load();
    if console_log::init_with_level(runtime_config.log_level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    if let Some(err) = problem {
        log::warn!("Falling back to default runtime config: {err:#}");
    }
    log::info!(
        "Starting Chroma Auth frontend (submit delay {} ms)",
        runtime_config.submit_delay_ms
    );
    config::install(runtime_config);

    mount_to_body(|| view! { <LoginPage/> });
}
