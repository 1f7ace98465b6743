mod app;
mod bridge;
mod components;
mod geo;
mod pages;
mod storage;
mod toast;

use app::App;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    storage::apply_saved_theme();
    mount_to_body(|| view! { <App/> })
}
