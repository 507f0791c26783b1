// src/domain/session.rs

use crate::domain::error::CatalogError;
use crate::domain::favorites::FavoritesSet;
use crate::domain::filter::{self, FilterDefaults, FilterSpec};
use crate::domain::geo::{project, GeoBounds, ProjectedPoint};
use crate::domain::listing::{Listing, ListingId};
use crate::domain::selection::Selection;
use crate::domain::store::PropertyStore;
use tracing::{debug, info};

/// One user interaction. Every change to session state goes through [`Session::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    FilterChanged(FilterSpec),
    ResetFilters,
    ToggleFavorite(ListingId),
    Select(ListingId),
    ClearSelection,
}

/// Result of running the current filter over the store.
#[derive(Debug)]
pub struct FilteredView<'a> {
    pub listings: Vec<&'a Listing>,
    /// `false` when the spec equals the reset defaults, so an empty list here
    /// can be told apart from "nothing filtered".
    pub is_filtered: bool,
}

/// A listing placed on the map surface.
#[derive(Debug)]
pub struct Marker<'a> {
    pub listing: &'a Listing,
    pub point: ProjectedPoint,
    pub selected: bool,
}

/// Browsing state for one user: filter, favorites and selection.
///
/// Nothing here is persisted; a new session starts with reset filters,
/// no favorites and no selection.
#[derive(Debug, Clone)]
pub struct Session {
    defaults: FilterDefaults,
    filter: FilterSpec,
    favorites: FavoritesSet,
    selection: Selection,
}

impl Session {
    pub fn new(defaults: FilterDefaults) -> Self {
        Self {
            defaults,
            filter: FilterSpec::reset(&defaults),
            favorites: FavoritesSet::new(),
            selection: Selection::default(),
        }
    }

    /// Applies `event`. On error the session is left untouched.
    ///
    /// Changing the filter never clears the selection, even when the selected
    /// listing no longer passes the new filter.
    pub fn apply(&mut self, event: SessionEvent, store: &PropertyStore) -> Result<(), CatalogError> {
        match event {
            SessionEvent::FilterChanged(spec) => {
                spec.validate()?;
                debug!(?spec, "filter changed");
                self.filter = spec;
            }
            SessionEvent::ResetFilters => {
                debug!("filters reset");
                self.filter = FilterSpec::reset(&self.defaults);
            }
            SessionEvent::ToggleFavorite(id) => {
                store.get(id)?;
                let added = self.favorites.toggle(id);
                info!(%id, added, total = self.favorites.len(), "favorite toggled");
            }
            SessionEvent::Select(id) => {
                store.get(id)?;
                self.selection.select(id);
                debug!(%id, "listing selected");
            }
            SessionEvent::ClearSelection => {
                self.selection.clear();
                debug!("selection cleared");
            }
        }
        Ok(())
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn defaults(&self) -> &FilterDefaults {
        &self.defaults
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn filtered<'a>(&self, store: &'a PropertyStore) -> Result<FilteredView<'a>, CatalogError> {
        Ok(FilteredView {
            listings: filter::apply(&self.filter, store)?,
            is_filtered: self.filter != FilterSpec::reset(&self.defaults),
        })
    }

    pub fn favorite_listings<'a>(&self, store: &'a PropertyStore) -> Vec<&'a Listing> {
        self.favorites.materialize(store)
    }

    pub fn selected_listing<'a>(&self, store: &'a PropertyStore) -> Option<&'a Listing> {
        self.selection.current().and_then(|id| store.get(id).ok())
    }

    /// Every store listing projected onto the map, regardless of the active filter.
    pub fn markers<'a>(
        &self,
        store: &'a PropertyStore,
        bounds: &GeoBounds,
    ) -> Result<Vec<Marker<'a>>, CatalogError> {
        store
            .iter()
            .map(|listing| {
                Ok(Marker {
                    listing,
                    point: project(listing.coordinate, bounds)?,
                    selected: self.selection.is_selected(listing.id),
                })
            })
            .collect()
    }
}
