//! Favorites view state.
//!
//! The local favorite set is an optimistic cache of server truth, owned by
//! one screen instance and discarded with it. Toggles apply locally first
//! and roll back exactly when the server rejects them; a refresh replaces
//! the whole set with server truth.

use super::optimistic::apply_optimistic;
use crate::client::ApiClient;
use crate::shared::{ClientError, Id, Property};
use std::collections::HashSet;
use std::sync::Arc;

/// Set of property ids the user has marked favorite, as the local view
/// understands it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<Id>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from the property records the favorites endpoint
    /// returns
    pub fn from_properties(properties: &[Property]) -> Self {
        Self {
            ids: properties.iter().map(|p| p.id.clone()).collect(),
        }
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: Id) {
        self.ids.insert(id);
    }

    pub fn remove(&mut self, id: &Id) {
        self.ids.remove(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }
}

/// Per-screen owner of the favorite set, wired to the gateway.
pub struct FavoritesView {
    api: Arc<ApiClient>,
    favorites: FavoriteSet,
}

impl FavoritesView {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            favorites: FavoriteSet::new(),
        }
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &Id) -> bool {
        self.favorites.contains(id)
    }

    /// Replace the local set with server truth
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let properties = self.api.get_favorites().await?;
        self.favorites = FavoriteSet::from_properties(&properties);
        Ok(())
    }

    /// Toggle one property, optimistically.
    ///
    /// The local set flips before the request goes out; if the server
    /// rejects the write the set is restored to the exact pre-toggle
    /// snapshot and the error surfaced so the caller can offer a retry.
    /// Returns whether the property is a favorite after a successful
    /// toggle.
    pub async fn toggle(&mut self, id: &Id) -> Result<bool, ClientError> {
        let adding = !self.favorites.contains(id);
        let api = Arc::clone(&self.api);
        let mutate_id = id.clone();
        let effect_id = id.clone();

        apply_optimistic(
            &mut self.favorites,
            move |set| {
                if adding {
                    set.insert(mutate_id);
                } else {
                    set.remove(&mutate_id);
                }
            },
            async move {
                if adding {
                    api.add_to_favorites(&effect_id).await
                } else {
                    api.remove_from_favorites(&effect_id).await
                }
            },
        )
        .await?;
        Ok(adding)
    }
}
