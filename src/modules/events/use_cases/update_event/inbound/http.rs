use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::adapters::inbound::event_id::EventIdPath;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventBody {
    pub title: Option<String>,
}

pub async fn handle(
    EventIdPath(id): EventIdPath,
    State(state): State<AppState>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    match state
        .update_handler
        .handle(UpdateEvent {
            id,
            title: body.title,
        })
        .await
    {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
