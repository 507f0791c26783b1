// errors.rs
use crate::domain::CatalogError;
use astra::Response;
use thiserror::Error;

/// Errors surfaced by request handlers, either from routing and query parsing
/// or from the catalog core.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ServerError::NotFound,
            CatalogError::InvalidRange { .. } => ServerError::BadRequest(err.to_string()),
            // Bad bounds or dataset records are configuration faults, not the caller's.
            CatalogError::DegenerateBounds(_)
            | CatalogError::InvalidListing { .. }
            | CatalogError::DuplicateId(_) => {
                tracing::error!(error = %err, "catalog misconfigured");
                ServerError::InternalError
            }
        }
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}
