use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leitner_algo::Card;
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::services::practice::{self, NewCard};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateCardRequest {
    front: Option<String>,
    back: Option<String>,
    hint: Option<String>,
    tags: Option<Vec<String>>,
}

#[derive(Serialize)]
struct CreateCardResponse {
    message: &'static str,
    card: Card,
}

pub async fn list_cards(State(state): State<AppState>) -> Response {
    let store = state.read_store().await;
    Json(practice::list_cards(&store)).into_response()
}

pub async fn create_card(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: CreateCardRequest = serde_json::from_slice(&body).map_err(|_| {
        AppError::validation("Request body must be a JSON object with string fields")
    })?;

    let mut store = state.write_store().await;
    let card = practice::add_card(
        &mut store,
        NewCard {
            front: payload.front,
            back: payload.back,
            hint: payload.hint,
            tags: payload.tags,
        },
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCardResponse {
            message: "Card added successfully",
            card,
        }),
    )
        .into_response())
}
