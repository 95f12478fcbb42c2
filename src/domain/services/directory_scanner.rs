use crate::domain::entities::directory_entry::FileMetadata;
use crate::domain::errors::listing_error::DirectoryListingError;
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

/// Lists the regular files directly inside a directory and returns a list of
/// [`FileMetadata`] values.
///
/// Entries come back in the order the platform yields them. Subdirectories,
/// and anything else that does not resolve to a regular file, are skipped.
///
/// # Errors
///
/// Returns a [`DirectoryListingError`] if:
/// - A [`ReadDirectory`](DirectoryListingError::ReadDirectory) error occurs when
///   the directory does not exist or cannot be opened.
/// - A [`FileMetadata`](DirectoryListingError::FileMetadata) error occurs while
///   iterating the directory or reading a file's modification time.
pub fn scan_directory(directory: &Path) -> Result<Vec<FileMetadata>, DirectoryListingError> {
    let entries =
        fs::read_dir(directory).map_err(|source| DirectoryListingError::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if let Some(metadata) = regular_file_metadata(&path) {
            files.push(extract_file_info(path, &metadata)?);
        }
    }
    Ok(files)
}

// Follows symlinks; broken links and unreadable entries count as "not a file".
fn regular_file_metadata(path: &Path) -> Option<Metadata> {
    fs::metadata(path).ok().filter(Metadata::is_file)
}

fn extract_file_info(
    path: PathBuf,
    metadata: &Metadata,
) -> Result<FileMetadata, DirectoryListingError> {
    let modified: DateTime<Local> = metadata.modified()?.into();
    Ok(FileMetadata {
        name: file_name(&path),
        size_bytes: metadata.len(),
        modified: modified.naive_local(),
        mime_type: guess_mime_type(&path),
        path,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn guess_mime_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}
