use leptos::prelude::*;
use crate::features::agent_chat::models::ActionResult;

// Collapsible card for one step; starts collapsed on every fresh render
#[component]
pub fn StepCard(
    index: usize,
    total: usize,
    step: ActionResult,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let status = step.status();
    let card_class = format!("step-card {}", status.class());
    let preview = step.preview();

    let content = Some(step.extracted_content.clone()).filter(|s| !s.is_empty());
    let memory = step.memory().map(str::to_string);
    let error = step.error_text().map(str::to_string);
    let metadata = step.metadata_pairs();

    view! {
        <div class=card_class>
            <div class="step-header" on:click=move |_| set_expanded.update(|open| *open = !*open)>
                <span class="step-glyph">{status.glyph()}</span>
                <span class="step-index">{format!("Step {}/{}", index + 1, total)}</span>
                <span class="step-preview">{preview}</span>
                <button class="step-toggle" title="Toggle details">
                    {move || if expanded.get() { "▾" } else { "▸" }}
                </button>
            </div>
            <Show when=move || expanded.get()>
                <div class="step-details">
                    {content.clone().map(|text| view! {
                        <div class="step-section">
                            <h4>"Extracted content"</h4>
                            <p>{text}</p>
                        </div>
                    })}
                    {memory.clone().map(|text| view! {
                        <div class="step-section">
                            <h4>"Memory"</h4>
                            <p>{text}</p>
                        </div>
                    })}
                    {error.clone().map(|text| view! {
                        <div class="step-section error">
                            <h4>"Error"</h4>
                            <p>{text}</p>
                        </div>
                    })}
                    {(!metadata.is_empty()).then(|| {
                        let rows = metadata.clone().into_iter().map(|(key, value)| view! {
                            <div class="metadata-row">
                                <span class="metadata-key">{key}</span>
                                <span class="metadata-value">{value}</span>
                            </div>
                        }).collect_view();
                        view! {
                            <div class="step-section">
                                <h4>"Metadata"</h4>
                                {rows}
                            </div>
                        }
                    })}
                </div>
            </Show>
        </div>
    }
}
