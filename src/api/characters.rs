use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{Character, CharacterId, NewCharacter};
use crate::error::AppError;

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteCharacterResponse {
    pub status: String,
}

/// `POST /character/add` — persist a new character and return it with its
/// assigned id. Wrong-typed or missing fields are rejected by the `Json`
/// extractor before this handler runs.
pub async fn create_character(
    State(state): State<AppState>,
    Json(new_character): Json<NewCharacter>,
) -> Result<Json<Character>, AppError> {
    let character = state.repo.insert_character(new_character).await?;
    Ok(Json(character))
}

/// `GET /character/getAll` — every persisted character; `[]` when the store
/// is empty.
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, AppError> {
    let characters = state.repo.list_characters().await?;
    Ok(Json(characters))
}

/// `GET /character/get/{id}` — one character, or 404 if the id matches
/// nothing.
pub async fn get_character(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Character>, AppError> {
    let character = state
        .repo
        .get_character(CharacterId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".into()))?;

    Ok(Json(character))
}

/// `DELETE /character/delete/{id}` — remove one character, or 404 if the id
/// matches nothing.
pub async fn delete_character(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteCharacterResponse>, AppError> {
    let deleted = state.repo.delete_character(CharacterId::new(id)).await?;
    if !deleted {
        return Err(AppError::NotFound("Character not found".into()));
    }

    Ok(Json(DeleteCharacterResponse {
        status: "Character deleted".to_string(),
    }))
}
