use crate::domain::entities::directory_entry::{DirectoryEntry, FileMetadata};
use crate::domain::errors::domain_error::DomainError;
use std::path::Path;

pub trait DirectoryListingUseCase: Send + Sync {
    /// Lists the regular files directly inside `directory`, in the order the
    /// platform yields them. Subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`DirectoryListing`](DomainError::DirectoryListing) error occurs while
    ///   opening the directory or reading an entry's metadata.
    fn scan_directory(&self, directory: &Path) -> Result<Vec<FileMetadata>, DomainError>;

    /// Requests a remote summary for one file and turns it into a table row.
    ///
    /// Never fails: summary errors end up as the row's summary text.
    fn summarize(&self, file: &FileMetadata) -> DirectoryEntry;

    /// Scans `directory` and summarizes every file, one after the other.
    ///
    /// # Errors
    ///
    /// Same as [`scan_directory`](Self::scan_directory). No row is produced
    /// when the scan fails.
    fn list_directory(&self, directory: &Path) -> Result<Vec<DirectoryEntry>, DomainError> {
        let files = self.scan_directory(directory)?;
        Ok(files.iter().map(|file| self.summarize(file)).collect())
    }
}
