// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Claims,
    error::{ApiError, ErrorBody},
    models::{
        ArtistResponse, ArtistsResponse, CreateArtistRequest, DeletedResponse,
        UpdateArtistRequest,
    },
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    responses(
        (status = 200, body = ArtistsResponse),
        (status = 401, body = ErrorBody),
        (status = 403, body = ErrorBody)
    )
)]
pub async fn list_artists(
    Claims(claims): Claims,
    State(state): State<AppState>,
) -> Json<ArtistsResponse> {
    tracing::debug!(sub = claims.subject(), "Listing artists");
    let store = state.store.read().await;
    Json(ArtistsResponse {
        success: true,
        artists: store.list_artists(),
    })
}

#[utoipa::path(
    get,
    path = "/artists/{artist_id}",
    params(("artist_id" = u64, Path, description = "Artist identifier")),
    tag = "Artists",
    responses(
        (status = 200, body = ArtistResponse),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn get_artist(
    Path(artist_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<ArtistResponse>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(ArtistResponse {
        success: true,
        artist: store.artist(artist_id)?,
    }))
}

#[utoipa::path(
    post,
    path = "/artists",
    request_body = CreateArtistRequest,
    tag = "Artists",
    responses(
        (status = 201, body = ArtistResponse),
        (status = 422, body = ErrorBody)
    )
)]
pub async fn create_artist(
    Claims(claims): Claims,
    State(state): State<AppState>,
    Json(request): Json<CreateArtistRequest>,
) -> Result<(StatusCode, Json<ArtistResponse>), ApiError> {
    let mut store = state.store.write().await;
    let artist = store.create_artist(request)?;
    tracing::info!(sub = claims.subject(), artist_id = artist.id, "Artist created");
    Ok((
        StatusCode::CREATED,
        Json(ArtistResponse {
            success: true,
            artist,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/artists/{artist_id}",
    params(("artist_id" = u64, Path, description = "Artist identifier")),
    request_body = UpdateArtistRequest,
    tag = "Artists",
    responses(
        (status = 200, body = ArtistResponse),
        (status = 404, body = ErrorBody),
        (status = 422, body = ErrorBody)
    )
)]
pub async fn update_artist(
    Path(artist_id): Path<u64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateArtistRequest>,
) -> Result<Json<ArtistResponse>, ApiError> {
    let mut store = state.store.write().await;
    let artist = store.update_artist(artist_id, request)?;
    Ok(Json(ArtistResponse {
        success: true,
        artist,
    }))
}

#[utoipa::path(
    delete,
    path = "/artists/{artist_id}",
    params(("artist_id" = u64, Path, description = "Artist identifier")),
    tag = "Artists",
    responses(
        (status = 200, body = DeletedResponse),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn delete_artist(
    Claims(claims): Claims,
    Path(artist_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete_artist(artist_id)?;
    tracing::info!(sub = claims.subject(), artist_id, "Artist deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: artist_id,
    }))
}
