// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenService;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The store is the only mutable state shared across requests; the token
/// service is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(store: InMemoryStore, tokens: TokenService) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens: Arc::new(tokens),
        }
    }
}
