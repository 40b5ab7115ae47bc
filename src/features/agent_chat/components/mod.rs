pub mod chat_panel;
pub mod message_bubble;
pub mod step_card;
pub mod trace_timeline;

pub use chat_panel::ChatPanel;
pub use message_bubble::MessageBubble;
pub use step_card::StepCard;
pub use trace_timeline::TraceTimeline;
