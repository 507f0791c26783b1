// src/api.rs
// JSON shapes served under /api.

use crate::domain::price::format_price;
use crate::domain::session::Marker;
use crate::domain::{Listing, ListingId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListingDto<'a> {
    #[serde(flatten)]
    pub listing: &'a Listing,
    pub price_label: String,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse<'a> {
    pub count: usize,
    pub is_filtered: bool,
    pub listings: Vec<ListingDto<'a>>,
}

#[derive(Debug, Serialize)]
pub struct MarkerDto<'a> {
    pub id: ListingId,
    pub title: &'a str,
    pub price_label: String,
    /// Normalized surface position, `[0, 1]` inside the bounding box.
    pub x: f64,
    pub y: f64,
    pub left_percent: f64,
    pub top_percent: f64,
    pub selected: bool,
}

impl<'a> MarkerDto<'a> {
    pub fn from_marker(marker: &Marker<'a>, currency: &str) -> Self {
        let (left, top) = marker.point.as_percent();
        Self {
            id: marker.listing.id,
            title: &marker.listing.title,
            price_label: format_price(marker.listing.price, currency),
            x: marker.point.x,
            y: marker.point.y,
            left_percent: left,
            top_percent: top,
            selected: marker.selected,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkersResponse<'a> {
    pub selected: Option<ListingId>,
    pub markers: Vec<MarkerDto<'a>>,
}
