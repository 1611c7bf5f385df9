// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory artist and movie store.
//!
//! Ids are assigned sequentially from 1 per entity and never reused.
//! Listings come back in id order.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::models::{
    Artist, CreateArtistRequest, CreateMovieRequest, Movie, UpdateArtistRequest,
    UpdateMovieRequest,
};

pub struct InMemoryStore {
    artists: BTreeMap<u64, Artist>,
    movies: BTreeMap<u64, Movie>,
    next_artist_id: u64,
    next_movie_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            artists: BTreeMap::new(),
            movies: BTreeMap::new(),
            next_artist_id: 1,
            next_movie_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_artists(&self) -> Vec<Artist> {
        self.artists.values().cloned().collect()
    }

    pub fn artist(&self, id: u64) -> Result<Artist, ApiError> {
        self.artists.get(&id).cloned().ok_or_else(ApiError::not_found)
    }

    pub fn create_artist(&mut self, request: CreateArtistRequest) -> Result<Artist, ApiError> {
        require_text(&request.name)?;
        require_text(&request.gender)?;

        let id = self.next_artist_id;
        self.next_artist_id += 1;
        let artist = Artist {
            id,
            name: request.name,
            age: request.age,
            gender: request.gender,
        };
        self.artists.insert(id, artist.clone());
        Ok(artist)
    }

    pub fn update_artist(
        &mut self,
        id: u64,
        request: UpdateArtistRequest,
    ) -> Result<Artist, ApiError> {
        let artist = self.artists.get_mut(&id).ok_or_else(ApiError::not_found)?;
        if request.is_empty() {
            return Err(ApiError::unprocessable());
        }
        if let Some(name) = &request.name {
            require_text(name)?;
        }
        if let Some(gender) = &request.gender {
            require_text(gender)?;
        }

        if let Some(name) = request.name {
            artist.name = name;
        }
        if let Some(age) = request.age {
            artist.age = age;
        }
        if let Some(gender) = request.gender {
            artist.gender = gender;
        }
        Ok(artist.clone())
    }

    pub fn delete_artist(&mut self, id: u64) -> Result<(), ApiError> {
        self.artists
            .remove(&id)
            .map(|_| ())
            .ok_or_else(ApiError::not_found)
    }

    pub fn list_movies(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    pub fn movie(&self, id: u64) -> Result<Movie, ApiError> {
        self.movies.get(&id).cloned().ok_or_else(ApiError::not_found)
    }

    pub fn create_movie(&mut self, request: CreateMovieRequest) -> Result<Movie, ApiError> {
        require_text(&request.title)?;

        let id = self.next_movie_id;
        self.next_movie_id += 1;
        let movie = Movie {
            id,
            title: request.title,
            release_date: request.release_date,
        };
        self.movies.insert(id, movie.clone());
        Ok(movie)
    }

    pub fn update_movie(&mut self, id: u64, request: UpdateMovieRequest) -> Result<Movie, ApiError> {
        let movie = self.movies.get_mut(&id).ok_or_else(ApiError::not_found)?;
        if request.is_empty() {
            return Err(ApiError::unprocessable());
        }
        if let Some(title) = &request.title {
            require_text(title)?;
        }

        if let Some(title) = request.title {
            movie.title = title;
        }
        if let Some(release_date) = request.release_date {
            movie.release_date = release_date;
        }
        Ok(movie.clone())
    }

    pub fn delete_movie(&mut self, id: u64) -> Result<(), ApiError> {
        self.movies
            .remove(&id)
            .map(|_| ())
            .ok_or_else(ApiError::not_found)
    }
}

fn require_text(value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::unprocessable())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn tom_cruise() -> CreateArtistRequest {
        CreateArtistRequest {
            name: "Tom Cruise".into(),
            age: 50,
            gender: "male".into(),
        }
    }

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut store = InMemoryStore::new();
        let first = store.create_artist(tom_cruise()).unwrap();
        let second = store.create_artist(tom_cruise()).unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        store.delete_artist(second.id).unwrap();
        let third = store.create_artist(tom_cruise()).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn blank_name_is_unprocessable() {
        let mut store = InMemoryStore::new();
        let mut request = tom_cruise();
        request.name = "  ".into();
        let err = store.create_artist(request).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(store.list_artists().is_empty());
    }

    #[test]
    fn update_applies_only_given_fields() {
        let mut store = InMemoryStore::new();
        let artist = store.create_artist(tom_cruise()).unwrap();

        let updated = store
            .update_artist(
                artist.id,
                UpdateArtistRequest {
                    age: Some(61),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.age, 61);
        assert_eq!(updated.name, "Tom Cruise");
        assert_eq!(store.artist(artist.id).unwrap(), updated);
    }

    #[test]
    fn empty_update_is_unprocessable() {
        let mut store = InMemoryStore::new();
        let movie = store
            .create_movie(CreateMovieRequest {
                title: "Top Gun".into(),
                release_date: 1986,
            })
            .unwrap();

        let err = store
            .update_movie(movie.id, UpdateMovieRequest::default())
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.artist(123456789).unwrap_err().status, StatusCode::NOT_FOUND);
        assert_eq!(store.delete_movie(7).unwrap_err().status, StatusCode::NOT_FOUND);
        assert_eq!(
            store
                .update_movie(7, UpdateMovieRequest::default())
                .unwrap_err()
                .status,
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn movies_list_in_id_order() {
        let mut store = InMemoryStore::new();
        for (title, year) in [("Top Gun", 1986), ("Jerry Maguire", 1996)] {
            store
                .create_movie(CreateMovieRequest {
                    title: title.into(),
                    release_date: year,
                })
                .unwrap();
        }
        let titles: Vec<_> = store.list_movies().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Top Gun", "Jerry Maguire"]);
    }
}
