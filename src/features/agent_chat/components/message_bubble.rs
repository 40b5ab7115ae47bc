use leptos::prelude::*;
use crate::core::models::{ChatMessage, Role};
use crate::features::agent_chat::components::TraceTimeline;
use crate::features::agent_chat::formatter::{format_response, FormattedResponse};

#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let row_class = format!("message-row {}", message.role.as_str());
    let icon = match message.role {
        Role::User => "🞓",
        Role::Assistant => "🟆",
    };
    let time = message.local_time();

    // Assistant replies may carry an agent trace; user turns are always plain
    let formatted = match message.role {
        Role::User => FormattedResponse::PlainText(message.content),
        Role::Assistant => format_response(&message.content),
    };
    let bubble_class = if formatted.is_timeline() {
        "message-bubble trace"
    } else {
        "message-bubble"
    };
    let body = match formatted {
        FormattedResponse::Timeline(history) => view! { <TraceTimeline history=history /> }.into_any(),
        FormattedResponse::PlainText(text) => view! { <p class="message-text">{text}</p> }.into_any(),
    };

    view! {
        <div class=row_class>
            <div class="message-avatar">{icon}</div>
            <div class=bubble_class>
                {body}
                <p class="message-time">{time}</p>
            </div>
        </div>
    }
}
