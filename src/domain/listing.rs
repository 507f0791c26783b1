// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a listing. Unique and positive within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ListingId)
    }
}

/// The closed set of property kinds the catalog carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apartment,
    Townhouse,
    Villa,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Apartment, Category::Townhouse, Category::Villa];

    /// Value used in query strings and JSON.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Apartment => "apartment",
            Category::Townhouse => "townhouse",
            Category::Villa => "villa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Apartment => "Apartment",
            Category::Townhouse => "Townhouse",
            Category::Villa => "Villa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A single property record. Built once from the dataset and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Whole currency units.
    pub price: u64,
    /// Square meters.
    pub area: f64,
    pub rooms: u32,
    pub category: Category,
    pub coordinate: Coordinate,
    pub description: String,
    pub image: String,
}
