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
        CreateMovieRequest, DeletedResponse, MovieResponse, MoviesResponse, UpdateMovieRequest,
    },
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses(
        (status = 200, body = MoviesResponse),
        (status = 401, body = ErrorBody),
        (status = 403, body = ErrorBody)
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    let store = state.store.read().await;
    Json(MoviesResponse {
        success: true,
        movies: store.list_movies(),
    })
}

#[utoipa::path(
    get,
    path = "/movies/{movie_id}",
    params(("movie_id" = u64, Path, description = "Movie identifier")),
    tag = "Movies",
    responses(
        (status = 200, body = MovieResponse),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn get_movie(
    Path(movie_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<MovieResponse>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(MovieResponse {
        success: true,
        movie: store.movie(movie_id)?,
    }))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    tag = "Movies",
    responses(
        (status = 201, body = MovieResponse),
        (status = 422, body = ErrorBody)
    )
)]
pub async fn create_movie(
    Claims(claims): Claims,
    State(state): State<AppState>,
    Json(request): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let mut store = state.store.write().await;
    let movie = store.create_movie(request)?;
    tracing::info!(sub = claims.subject(), movie_id = movie.id, "Movie created");
    Ok((
        StatusCode::CREATED,
        Json(MovieResponse {
            success: true,
            movie,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/movies/{movie_id}",
    params(("movie_id" = u64, Path, description = "Movie identifier")),
    request_body = UpdateMovieRequest,
    tag = "Movies",
    responses(
        (status = 200, body = MovieResponse),
        (status = 404, body = ErrorBody),
        (status = 422, body = ErrorBody)
    )
)]
pub async fn update_movie(
    Path(movie_id): Path<u64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateMovieRequest>,
) -> Result<Json<MovieResponse>, ApiError> {
    let mut store = state.store.write().await;
    let movie = store.update_movie(movie_id, request)?;
    Ok(Json(MovieResponse {
        success: true,
        movie,
    }))
}

#[utoipa::path(
    delete,
    path = "/movies/{movie_id}",
    params(("movie_id" = u64, Path, description = "Movie identifier")),
    tag = "Movies",
    responses(
        (status = 200, body = DeletedResponse),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn delete_movie(
    Claims(claims): Claims,
    Path(movie_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete_movie(movie_id)?;
    tracing::info!(sub = claims.subject(), movie_id, "Movie deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: movie_id,
    }))
}
