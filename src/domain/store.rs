// src/domain/store.rs

use crate::domain::error::CatalogError;
use crate::domain::listing::{Listing, ListingId};
use std::collections::HashMap;

/// The immutable, ordered listing collection loaded at startup.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    listings: Vec<Listing>,
    index: HashMap<ListingId, usize>,
}

impl PropertyStore {
    /// Builds the store, rejecting records that break the listing invariants:
    /// positive unique ids, positive price, area and rooms, finite coordinates.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(listings.len());

        for (pos, listing) in listings.iter().enumerate() {
            validate_listing(listing)?;
            if index.insert(listing.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(listing.id));
            }
        }

        Ok(Self { listings, index })
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn get(&self, id: ListingId) -> Result<&Listing, CatalogError> {
        self.index
            .get(&id)
            .map(|&pos| &self.listings[pos])
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertyStore {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_listing(listing: &Listing) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidListing {
        id: listing.id,
        reason: reason.to_string(),
    };

    if listing.id.0 == 0 {
        return Err(invalid("id must be positive"));
    }
    if listing.price == 0 {
        return Err(invalid("price must be positive"));
    }
    if !(listing.area.is_finite() && listing.area > 0.0) {
        return Err(invalid("area must be a positive number"));
    }
    if listing.rooms == 0 {
        return Err(invalid("room count must be positive"));
    }
    if !(listing.coordinate.lat.is_finite() && listing.coordinate.lng.is_finite()) {
        return Err(invalid("coordinate must be finite"));
    }
    Ok(())
}
