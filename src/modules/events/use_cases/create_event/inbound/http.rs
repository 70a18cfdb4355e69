use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateEventBody {
    pub title: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    // A body that is missing or does not decode is read as `{}`.
    let body = body.map(|Json(b)| b).unwrap_or_default();

    match state
        .create_handler
        .handle(CreateEvent { title: body.title })
        .await
    {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
