use crate::domain::entities::directory_entry::{DirectoryEntry, FileMetadata};
use crate::domain::entities::drive::Drive;
use crate::domain::entities::resource::{ResolvedResource, ResourceKind};

#[derive(Clone, Debug)]
pub enum BrowseMessage {
    ResourceKindSelected(ResourceKind),
    DrivesFetched(Vec<Drive>),
    DriveSelected(Drive),
    PathChanged(String),
    SelectPressed,
    SelectionRejected(String),
    ResourceResolved(Option<ResolvedResource>),
    DirectoryScanned {
        generation: u64,
        result: Result<Vec<FileMetadata>, String>,
    },
    FileSummarized {
        generation: u64,
        entry: DirectoryEntry,
    },
}
