use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::response::AppError;
use crate::services::practice;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest {
    card_front: Option<String>,
    card_back: Option<String>,
    difficulty: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintQuery {
    card_front: Option<String>,
    card_back: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResponse {
    message: &'static str,
    previous_bucket: Option<u32>,
    new_bucket: u32,
}

#[derive(Serialize)]
struct HintResponse {
    hint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NextDayResponse {
    message: String,
    current_day: u64,
}

pub async fn practice_cards(State(state): State<AppState>) -> Response {
    let store = state.read_store().await;
    Json(practice::practice_session(&store)).into_response()
}

pub async fn update_card(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: UpdateRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::validation("Request body must be a JSON object"))?;

    let mut store = state.write_store().await;
    let timestamp = chrono::Utc::now().timestamp_millis();
    let event = practice::record_answer(
        &mut store,
        payload.card_front.as_deref(),
        payload.card_back.as_deref(),
        payload.difficulty.as_ref(),
        timestamp,
    )?;

    Ok(Json(UpdateResponse {
        message: "Card updated successfully",
        previous_bucket: event.previous_bucket,
        new_bucket: event.new_bucket,
    })
    .into_response())
}

pub async fn hint(
    State(state): State<AppState>,
    query: Result<Query<HintQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|err| {
        tracing::debug!(error = %err, "rejected hint query");
        AppError::validation("Missing cardFront or cardBack query parameter")
    })?;
    let store = state.read_store().await;
    let hint = practice::hint_for(
        &store,
        query.card_front.as_deref(),
        query.card_back.as_deref(),
    )?;

    Ok(Json(HintResponse { hint }).into_response())
}

pub async fn progress(State(state): State<AppState>) -> Response {
    let store = state.read_store().await;
    Json(practice::progress(&store)).into_response()
}

pub async fn next_day(State(state): State<AppState>) -> Response {
    let mut store = state.write_store().await;
    let day = practice::advance_day(&mut store);

    Json(NextDayResponse {
        message: format!("Advanced to day {day}"),
        current_day: day,
    })
    .into_response()
}
