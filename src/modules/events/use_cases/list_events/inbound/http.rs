use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::events::adapters::inbound::event_id::EventIdPath;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.list().await {
        Ok(events) => Json(events).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get(
    EventIdPath(id): EventIdPath,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.list_handler.get(id).await {
        Ok(event) => Json(event).into_response(),
        Err(e) => e.into_response(),
    }
}
