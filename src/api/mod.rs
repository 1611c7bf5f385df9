// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::{header, Method},
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{permissions::*, RequirePermission},
    error::ErrorBody,
    models::{
        Artist, ArtistResponse, ArtistsResponse, CreateArtistRequest, CreateMovieRequest,
        DeletedResponse, Movie, MovieResponse, MoviesResponse, UpdateArtistRequest,
        UpdateMovieRequest,
    },
    state::AppState,
};

pub mod artists;
pub mod health;
pub mod movies;

pub fn router(state: AppState) -> Router {
    let authorizer = state.authorizer.clone();
    let guard = move |permission: &'static str| {
        RequirePermission::new(authorizer.clone(), permission)
    };

    let routes = Router::new()
        .route(
            "/artists",
            get(artists::list_artists)
                .route_layer(guard(GET_ARTISTS))
                .merge(post(artists::create_artist).route_layer(guard(POST_ARTISTS))),
        )
        .route(
            "/artists/{artist_id}",
            get(artists::get_artist)
                .route_layer(guard(GET_ARTISTS))
                .merge(patch(artists::update_artist).route_layer(guard(PATCH_ARTISTS)))
                .merge(delete(artists::delete_artist).route_layer(guard(DELETE_ARTISTS))),
        )
        .route(
            "/movies",
            get(movies::list_movies)
                .route_layer(guard(GET_MOVIES))
                .merge(post(movies::create_movie).route_layer(guard(POST_MOVIES))),
        )
        .route(
            "/movies/{movie_id}",
            get(movies::get_movie)
                .route_layer(guard(GET_MOVIES))
                .merge(patch(movies::update_movie).route_layer(guard(PATCH_MOVIES)))
                .merge(delete(movies::delete_movie).route_layer(guard(DELETE_MOVIES))),
        )
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        artists::list_artists,
        artists::get_artist,
        artists::create_artist,
        artists::update_artist,
        artists::delete_artist,
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            Artist,
            Movie,
            ArtistResponse,
            ArtistsResponse,
            MovieResponse,
            MoviesResponse,
            DeletedResponse,
            CreateArtistRequest,
            UpdateArtistRequest,
            CreateMovieRequest,
            UpdateMovieRequest,
            ErrorBody
        )
    ),
    tags(
        (name = "Artists", description = "Artist management"),
        (name = "Movies", description = "Movie management"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
