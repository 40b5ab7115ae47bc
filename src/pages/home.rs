use leptos::prelude::*;
use crate::features::agent_chat::components::ChatPanel;
use crate::features::status::components::StatusPanel;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Redis Hackathon App"</h1>
            </header>
            <div class="home-layout">
                <StatusPanel />
                <ChatPanel />
            </div>
        </div>
    }
}
