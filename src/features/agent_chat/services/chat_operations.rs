use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::config::ApiConfig;
use crate::core::models::ChatContext;
use crate::core::services::send_chat;
use crate::features::agent_chat::session::ChatSession;

// Keeps the newest turn visible: scroll the end-of-transcript marker into view
// whenever a turn is appended or the pending bubble appears or goes away
pub fn follow_transcript(session: RwSignal<ChatSession>, end_marker: NodeRef<Div>) {
    Effect::new(move |_| {
        session.with(|s| (s.messages().len(), s.is_sending()));
        if let Some(marker) = end_marker.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            marker.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

// Send the current input as one request/response cycle
pub fn create_send_message(
    session: RwSignal<ChatSession>,
    config: ApiConfig,
    context: ChatContext,
) -> impl Fn() + Clone {
    move || {
        // User turn lands in the transcript before the request starts
        let Some(request) = session.try_update(|s| s.submit(&context)).flatten() else {
            return;
        };

        let config = config.clone();
        spawn_local(async move {
            let outcome = send_chat(&config, &request).await;
            match &outcome {
                Ok(reply) => {
                    web_sys::console::log_1(&format!("Received reply ({} chars)", reply.message.len()).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Chat error: {}", e).into());
                }
            }
            session.update(|s| {
                s.complete(outcome);
            });
        });
    }
}
