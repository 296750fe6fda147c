use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongInput {
    /// Ignored; ids are assigned by the backend.
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    pub artist: String,
    pub release_date: DateTimeWithTimeZone,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongInput {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub release_date: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// GET /songs -> 200 with the full library.
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::song::Model>>, JsonApiError> {
    let all = state.songs.list().await?;
    info!(count = all.len(), "list songs");
    Ok(Json(all))
}

/// GET /songs/:id -> 200 or 404.
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::song::Model>, JsonApiError> {
    match state.songs.get(id).await? {
        Some(song) => Ok(Json(song)),
        None => Err(JsonApiError::song_not_found()),
    }
}

/// POST /songs -> 201 with the stored record and a Location header.
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateSongInput>,
) -> Result<impl IntoResponse, JsonApiError> {
    // any caller-supplied id is discarded
    let created = state
        .songs
        .create(&input.title, &input.artist, input.release_date)
        .await?;
    let location = format!("/songs/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /songs/:id -> 204; 400 on validation or id mismatch; 404 when absent.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateSongInput>,
) -> Result<StatusCode, JsonApiError> {
    let replacement = models::song::Model {
        id: input.id,
        title: input.title,
        artist: input.artist,
        release_date: input.release_date,
    };
    if state.songs.update(id, &replacement).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::song_not_found())
    }
}

/// DELETE /songs/:id -> 200 with a confirmation message; 404 when absent.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageBody>, JsonApiError> {
    if state.songs.delete(id).await? {
        Ok(Json(MessageBody { message: "Song deleted successfully" }))
    } else {
        Err(JsonApiError::song_not_found())
    }
}
