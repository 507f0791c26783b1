pub mod error;
pub mod favorites;
pub mod filter;
pub mod geo;
pub mod listing;
pub mod price;
pub mod selection;
pub mod session;
pub mod store;


pub use error::CatalogError;
pub use listing::{Category, Listing, ListingId};
pub use session::{Session, SessionEvent};
pub use store::PropertyStore;
