use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use crate::core::config::ApiConfig;
use crate::core::models::ChatContext;
use crate::features::agent_chat::components::MessageBubble;
use crate::features::agent_chat::services::{create_send_message, follow_transcript};
use crate::features::agent_chat::session::{is_submit_key, ChatSession};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let context = use_context::<ChatContext>().unwrap_or_default();

    // Session lives as long as this panel
    let session = RwSignal::new(ChatSession::new());
    let transcript_end: NodeRef<Div> = NodeRef::new();
    follow_transcript(session, transcript_end);

    let repo_label = context.repo.as_ref().map(|repo| repo.full_name());
    let placeholder = if context.repo.is_some() {
        "Ask about your repository..."
    } else {
        "Select a repository first..."
    };

    let send = create_send_message(session, config, context);
    let send_on_enter = send.clone();

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()) {
            ev.prevent_default();
            send_on_enter();
        }
    };

    let is_sending = move || session.with(|s| s.is_sending());

    view! {
        <div class="chat-panel">
            <div class="chat-header">
                <h2>"GitHub Assistant"</h2>
                {repo_label.map(|label| view! { <p class="chat-repo">{label}</p> })}
            </div>

            <div class="chat-transcript">
                <Show when=move || session.with(|s| s.messages().is_empty())>
                    <div class="chat-empty">
                        <p>"GitHub Assistant"</p>
                        <p class="hint">"Ask me anything about your repository, code, or files!"</p>
                    </div>
                </Show>
                <For
                    each=move || session.with(|s| s.messages().to_vec())
                    key=|message| message.id.clone()
                    children=move |message| view! { <MessageBubble message=message /> }
                />
                <Show when=is_sending>
                    <div class="message-row assistant pending">
                        <div class="message-avatar">"🟆"</div>
                        <div class="message-bubble"><span class="spinner">"Thinking…"</span></div>
                    </div>
                </Show>
                <div class="transcript-end" node_ref=transcript_end></div>
            </div>

            <div class="chat-input" class:send-failed=move || session.with(|s| s.last_send_failed())>
                <textarea
                    rows="2"
                    placeholder=placeholder
                    prop:value=move || session.with(|s| s.input().to_string())
                    prop:disabled=is_sending
                    on:input=move |ev| session.update(|s| s.set_input(event_target_value(&ev)))
                    on:keydown=handle_keydown
                ></textarea>
                <button
                    class="btn-primary send-btn"
                    disabled=move || !session.with(|s| s.can_submit())
                    on:click=move |_| send()
                >
                    {move || if is_sending() { "…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
