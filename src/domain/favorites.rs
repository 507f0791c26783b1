// src/domain/favorites.rs

use crate::domain::listing::{Listing, ListingId};
use crate::domain::store::PropertyStore;
use std::collections::HashSet;

/// Listing ids the user has marked as favorite. Lives only as long as the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesSet {
    ids: HashSet<ListingId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present. Returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite listings in store order (not the order they were added).
    /// Ids that don't resolve in `store` are skipped.
    pub fn materialize<'a>(&self, store: &'a PropertyStore) -> Vec<&'a Listing> {
        store.iter().filter(|l| self.contains(l.id)).collect()
    }
}
