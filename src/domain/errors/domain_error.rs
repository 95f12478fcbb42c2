use crate::domain::errors::listing_error::DirectoryListingError;
use crate::domain::errors::selection_error::SelectionError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Failed to list files: {0}")]
    DirectoryListing(#[from] DirectoryListingError),
    #[error("{0}")]
    Selection(#[from] SelectionError),
}
