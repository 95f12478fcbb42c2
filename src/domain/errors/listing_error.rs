use std::io;
use std::path::PathBuf;
use tokio::task::JoinError;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryListingError {
    #[error("{source} ({})", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File metadata error: {0}")]
    FileMetadata(#[from] io::Error),
    #[error("Tokio error: {0}")]
    Tokio(#[from] JoinError),
}
