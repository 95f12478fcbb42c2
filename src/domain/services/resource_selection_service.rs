use crate::domain::entities::drive::Drive;
use crate::domain::entities::resource::{ResolvedResource, ResourceKind};
use crate::domain::errors::domain_error::DomainError;
use crate::domain::errors::selection_error::SelectionError;
use crate::domain::ports::primary::resource_selection_use_case::ResourceSelectionUseCase;
use crate::domain::ports::secondary::drive_provider::DriveProvider;
use crate::domain::ports::secondary::resource_picker::ResourcePicker;
use std::sync::Arc;
use tracing::warn;

pub struct ResourceSelectionService {
    picker: Arc<dyn ResourcePicker>,
    drive_provider: Arc<dyn DriveProvider>,
}

impl ResourceSelectionService {
    pub fn new(picker: Arc<dyn ResourcePicker>, drive_provider: Arc<dyn DriveProvider>) -> Self {
        Self {
            picker,
            drive_provider,
        }
    }

    fn resolve_file(&self, dialog_title: &str) -> Option<ResolvedResource> {
        let file = self.picker.pick_file(dialog_title)?;
        let directory = file.parent()?.to_path_buf();
        Some(ResolvedResource {
            display_path: file,
            directory,
        })
    }

    fn resolve_drive(drive: Option<&Drive>) -> Option<ResolvedResource> {
        let drive = drive?;
        if drive.mount_point.exists() {
            Some(ResolvedResource::directory(drive.mount_point.clone()))
        } else {
            warn!(drive = %drive, "drive root not found, nothing to list");
            None
        }
    }
}

impl ResourceSelectionUseCase for ResourceSelectionService {
    fn available_drives(&self) -> Vec<Drive> {
        self.drive_provider.list_drives()
    }

    fn resolve(
        &self,
        kind: Option<ResourceKind>,
        drive: Option<&Drive>,
        dialog_title: &str,
    ) -> Result<Option<ResolvedResource>, DomainError> {
        let resolved = match kind.ok_or(SelectionError::NoResourceKind)? {
            ResourceKind::Folder => self
                .picker
                .pick_folder(dialog_title)
                .map(ResolvedResource::directory),
            ResourceKind::File => self.resolve_file(dialog_title),
            ResourceKind::Drive => Self::resolve_drive(drive),
        };
        Ok(resolved)
    }
}
