// src/domain/geo.rs

use crate::domain::error::{Axis, CatalogError};
use crate::domain::listing::Coordinate;
use serde::{Deserialize, Serialize};

/// The lat/lng rectangle the map surface covers.
///
/// Defaults to the area around the catalog's listings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            lat_min: 55.73,
            lat_max: 55.77,
            lng_min: 37.60,
            lng_max: 37.65,
        }
    }
}

impl GeoBounds {
    /// Fails with `DegenerateBounds` when either axis has zero (or non-finite) width.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let lat_span = self.lat_max - self.lat_min;
        let lng_span = self.lng_max - self.lng_min;

        if lat_span == 0.0 || !lat_span.is_finite() {
            return Err(CatalogError::DegenerateBounds(Axis::Latitude));
        }
        if lng_span == 0.0 || !lng_span.is_finite() {
            return Err(CatalogError::DegenerateBounds(Axis::Longitude));
        }
        Ok(())
    }
}

/// Position on the map surface. `(0, 0)` is the top-left corner, `(1, 1)` bottom-right.
/// Points outside the bounding box fall outside `[0, 1]`; they are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    /// `(left, top)` in percent, for CSS positioning.
    pub fn as_percent(&self) -> (f64, f64) {
        (self.x * 100.0, self.y * 100.0)
    }
}

/// Linear rescale of `coord` into `bounds`. Latitude is inverted since north is up
/// on screen. No map projection is applied, which is fine for a box a few km wide.
pub fn project(coord: Coordinate, bounds: &GeoBounds) -> Result<ProjectedPoint, CatalogError> {
    bounds.validate()?;

    Ok(ProjectedPoint {
        x: (coord.lng - bounds.lng_min) / (bounds.lng_max - bounds.lng_min),
        y: (bounds.lat_max - coord.lat) / (bounds.lat_max - bounds.lat_min),
    })
}
