// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the artists and movies endpoints. All
//! types derive `Serialize`/`Deserialize` and `ToSchema` for JSON handling
//! and OpenAPI documentation.
//!
//! Success responses wrap their payload in `{"success": true, ...}`, matching
//! the `{"success": false, ...}` error envelope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Artist Models
// =============================================================================

/// A performer who can be cast in movies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// Request body for creating an artist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateArtistRequest {
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// Partial update for an artist. At least one field must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateArtistRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl UpdateArtistRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArtistsResponse {
    pub success: bool,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArtistResponse {
    pub success: bool,
    pub artist: Artist,
}

// =============================================================================
// Movie Models
// =============================================================================

/// A movie in the agency's catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Release year.
    pub release_date: i32,
}

/// Request body for creating a movie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    pub title: String,
    pub release_date: i32,
}

/// Partial update for a movie. At least one field must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMovieRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<i32>,
}

impl UpdateMovieRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_date.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    pub success: bool,
    pub movie: Movie,
}

// =============================================================================
// Shared
// =============================================================================

/// Response for a successful delete, echoing the removed id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: u64,
}
