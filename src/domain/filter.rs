// src/domain/filter.rs

use crate::domain::error::CatalogError;
use crate::domain::listing::{Category, Listing};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Inclusive `[min, max]` range. `min > max` is a caller error and is never
/// corrected here; see [`FilterSpec::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy + Display> ValueRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), CatalogError> {
        // Written as a negation so NaN bounds are rejected too.
        if !(self.min <= self.max) {
            return Err(CatalogError::InvalidRange {
                field,
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(Category),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomsFilter {
    Any,
    Exactly(u32),
}

/// Upper bounds used when filters are reset, plus slider steps for the form.
///
/// These are configuration constants and are not derived from the dataset: a
/// listing priced above `price_max` (or larger than `area_max`) stays hidden
/// after a reset until the constants are raised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub price_max: u64,
    pub area_max: f64,
    pub price_step: u64,
    pub area_step: f64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            price_max: 40_000_000,
            area_max: 200.0,
            price_step: 1_000_000,
            area_step: 5.0,
        }
    }
}

/// The user's current filter selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub price: ValueRange<u64>,
    pub area: ValueRange<f64>,
    pub category: CategoryFilter,
    pub rooms: RoomsFilter,
}

impl FilterSpec {
    /// Full-range spec: `[0, price_max]`, `[0, area_max]`, any category, any rooms.
    pub fn reset(defaults: &FilterDefaults) -> Self {
        Self {
            price: ValueRange::new(0, defaults.price_max),
            area: ValueRange::new(0.0, defaults.area_max),
            category: CategoryFilter::Any,
            rooms: RoomsFilter::Any,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        self.price.validate("price")?;
        self.area.validate("area")
    }

    /// All four predicates must hold.
    pub fn matches(&self, listing: &Listing) -> bool {
        let category_match = match self.category {
            CategoryFilter::Any => true,
            CategoryFilter::Only(c) => listing.category == c,
        };
        let rooms_match = match self.rooms {
            RoomsFilter::Any => true,
            RoomsFilter::Exactly(n) => listing.rooms == n,
        };

        self.price.contains(listing.price)
            && self.area.contains(listing.area)
            && category_match
            && rooms_match
    }
}

/// Returns every listing matching `spec`, keeping input order.
///
/// A spec with `min > max` on either range is rejected with
/// [`CatalogError::InvalidRange`] rather than treated as matching nothing.
pub fn apply<'a, I>(spec: &FilterSpec, listings: I) -> Result<Vec<&'a Listing>, CatalogError>
where
    I: IntoIterator<Item = &'a Listing>,
{
    spec.validate()?;
    Ok(listings.into_iter().filter(|l| spec.matches(l)).collect())
}
