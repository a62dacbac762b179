//! Catalog CRUD handlers

use crate::{ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use vidcat_store::Video;

/// One-line status body, `{"message": ...}`
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

/// GET /videos
pub async fn list_videos(State(state): State<AppState>) -> Result<Json<Vec<Video>>, ApiError> {
    let store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("store lock poisoned")))?;

    Ok(Json(store.videos().to_vec()))
}

/// POST /videos
pub async fn create_video(
    State(state): State<AppState>,
    Json(video): Json<Video>,
) -> Result<(StatusCode, Json<StatusMessage>), ApiError> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("store lock poisoned")))?;

    // Wire contract: 201 signals a duplicate id, 200 a successful create.
    if store.insert(video)? {
        Ok((
            StatusCode::OK,
            Json(StatusMessage {
                message: "Created new video".to_string(),
            }),
        ))
    } else {
        Ok((
            StatusCode::CREATED,
            Json(StatusMessage {
                message: "video has already been create".to_string(),
            }),
        ))
    }
}

/// DELETE /videos/:id
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StatusMessage>, ApiError> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("store lock poisoned")))?;

    if store.remove(id)? {
        Ok(Json(StatusMessage {
            message: format!("Video = {} is removed", id),
        }))
    } else {
        Err(ApiError::NotFound(format!("video = {} doesn't exist", id)))
    }
}

/// PUT /videos/:id
pub async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(video): Json<Video>,
) -> Result<Json<StatusMessage>, ApiError> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("store lock poisoned")))?;

    // The body replaces the matched record as-is; its id is not checked
    // against the path id.
    if store.replace(id, video)? {
        Ok(Json(StatusMessage {
            message: format!("Video = {} is updated", id),
        }))
    } else {
        Err(ApiError::NotFound(format!("video = {} doesn't exist", id)))
    }
}

/// GET /videos/folder/:folder
pub async fn videos_by_folder(
    State(state): State<AppState>,
    Path(folder): Path<String>,
) -> Result<Json<Vec<Video>>, ApiError> {
    let store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("store lock poisoned")))?;

    // Embedded spaces are cosmetic; folders are stored without them
    let videos = store.by_folder(&folder.replace(' ', ""));
    if videos.is_empty() {
        return Err(ApiError::NotFound(format!(
            "there are no videos inside {}",
            folder
        )));
    }

    Ok(Json(videos))
}

/// GET /videos/tag/:tag
pub async fn videos_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Video>>, ApiError> {
    let store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("store lock poisoned")))?;

    let videos = store.by_tags(&tag.replace(' ', ""));
    if videos.is_empty() {
        return Err(ApiError::NotFound(format!(
            "video with tag(s) {} doesn't exist",
            tag
        )));
    }

    Ok(Json(videos))
}
