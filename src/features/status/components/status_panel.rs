use leptos::prelude::*;
use crate::core::config::ApiConfig;
use crate::features::status::hooks::use_status;

#[component]
pub fn StatusPanel() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let status = use_status(config);

    view! {
        <section class="status-panel">
            <Show when=move || status.with(|s| s.loading)>
                <p class="status-loading">"Loading..."</p>
            </Show>
            <Show when=move || status.with(|s| !s.error.is_empty())>
                <div class="status-error">
                    <p>{move || status.with(|s| s.error.clone())}</p>
                </div>
            </Show>
            <Show when=move || status.with(|s| s.is_ready())>
                <div class="status-cards">
                    <div class="status-card">
                        <h2>"API Message"</h2>
                        <p>{move || status.with(|s| s.message.clone())}</p>
                    </div>
                    <div class="status-card health">
                        <h2>"Health Status"</h2>
                        <p>{move || status.with(|s| s.health.clone())}</p>
                    </div>
                </div>
            </Show>
        </section>
    }
}
