use crate::domain::entities::drive::Drive;
use crate::domain::entities::resource::{ResolvedResource, ResourceKind};
use crate::domain::errors::domain_error::DomainError;

pub trait ResourceSelectionUseCase: Send + Sync {
    fn available_drives(&self) -> Vec<Drive>;

    /// Turns the user's choice into a directory to list.
    ///
    /// `Ok(None)` means nothing should happen: a dialog was cancelled or the
    /// drive root is not present on this machine.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`Selection`](DomainError::Selection) error occurs because no resource
    ///   kind was chosen.
    fn resolve(
        &self,
        kind: Option<ResourceKind>,
        drive: Option<&Drive>,
        dialog_title: &str,
    ) -> Result<Option<ResolvedResource>, DomainError>;
}
