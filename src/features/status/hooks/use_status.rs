use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::config::ApiConfig;
use crate::core::error::ClientError;
use crate::core::services::{fetch_health_status, fetch_root_message};
use crate::features::status::StatusState;

// Root first, then health; the first failure ends the load
pub async fn load_status(config: &ApiConfig) -> Result<(String, String), ClientError> {
    let message = fetch_root_message(config).await?;
    let health = fetch_health_status(config).await?;
    Ok((message, health))
}

// Hook that runs the status fetch once on mount
pub fn use_status(config: ApiConfig) -> ReadSignal<StatusState> {
    let (status, set_status) = signal(StatusState::loading());

    spawn_local(async move {
        let outcome = load_status(&config).await;
        if let Err(e) = &outcome {
            web_sys::console::error_1(&format!("Error fetching data: {}", e).into());
        }
        set_status.set(StatusState::from_outcome(outcome));
    });

    status
}
