use leptos::prelude::*;
use crate::core::config::{load_chat_context, ApiConfig};
use crate::pages::Home;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::resolve();
    web_sys::console::log_1(&format!("Using backend at {}", config.base_url()).into());

    provide_context(config);
    provide_context(load_chat_context());

    view! {
        <main class="app">
            <Home />
        </main>
    }
}
