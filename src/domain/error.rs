use crate::domain::listing::ListingId;
use thiserror::Error;

/// Which axis of the bounding box has zero width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors raised by the catalog core. All are recoverable; the caller decides
/// whether to show a message or fall back to defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("listing {0} not found")]
    NotFound(ListingId),

    #[error("invalid {field} range: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: String,
        max: String,
    },

    #[error("degenerate bounding box: {0} span is zero")]
    DegenerateBounds(Axis),

    #[error("invalid listing {id}: {reason}")]
    InvalidListing { id: ListingId, reason: String },

    #[error("duplicate listing id {0}")]
    DuplicateId(ListingId),
}
