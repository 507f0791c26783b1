// src/domain/selection.rs

use crate::domain::listing::ListingId;

/// The listing currently in focus across the catalog, map and favorites views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Selected(ListingId),
}

impl Selection {
    /// Reselecting the current id leaves the state as it is.
    pub fn select(&mut self, id: ListingId) {
        *self = Selection::Selected(id);
    }

    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    pub fn current(&self) -> Option<ListingId> {
        match self {
            Selection::Empty => None,
            Selection::Selected(id) => Some(*id),
        }
    }

    pub fn is_selected(&self, id: ListingId) -> bool {
        self.current() == Some(id)
    }
}
