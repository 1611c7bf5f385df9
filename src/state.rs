// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::Authorizer;
use crate::store::InMemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub authorizer: Arc<Authorizer>,
}

impl AppState {
    pub fn new(store: InMemoryStore, authorizer: Authorizer) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            authorizer: Arc::new(authorizer),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// Empty store and an authorizer whose key endpoint is unreachable.
    pub fn for_tests() -> Self {
        let config = crate::auth::testing::auth_config("http://127.0.0.1:9/.well-known/jwks.json");
        let authorizer = Authorizer::new(config).expect("test authorizer builds");
        Self::new(InMemoryStore::new(), authorizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_starts_empty_without_keys() {
        let state = AppState::for_tests();
        assert!(state.store.read().await.list_artists().is_empty());
        assert!(!state.authorizer.jwks().is_cached().await);
    }
}
