use leptos::prelude::*;
use crate::features::agent_chat::components::StepCard;
use crate::features::agent_chat::models::AgentHistory;

#[component]
pub fn TraceTimeline(history: AgentHistory) -> impl IntoView {
    let total = history.len();

    view! {
        <div class="trace-timeline">
            <div class="trace-summary">{format!("{} step{}", total, if total == 1 { "" } else { "s" })}</div>
            {history.all_results.into_iter().enumerate().map(|(index, step)| view! {
                <StepCard index=index total=total step=step />
            }).collect_view()}
        </div>
    }
}
