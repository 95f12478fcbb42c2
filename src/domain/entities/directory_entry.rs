use crate::config::constants::{DATE_TIME_FORMAT, UNKNOWN_MIME_TYPE};
use crate::domain::entities::summary::Summary;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// A regular file found while scanning a directory, before it is summarized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub modified: NaiveDateTime,
    pub mime_type: Option<String>,
}

impl FileMetadata {
    pub fn last_modified(&self) -> String {
        self.modified.format(DATE_TIME_FORMAT).to_string()
    }

    pub fn mime_type_or_unknown(&self) -> String {
        self.mime_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_MIME_TYPE.to_string())
    }
}

/// One rendered row of the file table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub size_bytes: u64,
    pub last_modified: String,
    pub mime_type: String,
    pub summary: String,
}

impl DirectoryEntry {
    pub fn new(file: &FileMetadata, summary: &Summary) -> Self {
        Self {
            name: file.name.clone(),
            size_bytes: file.size_bytes,
            last_modified: file.last_modified(),
            mime_type: file.mime_type_or_unknown(),
            summary: summary.to_string(),
        }
    }

    pub fn size_label(&self) -> String {
        format!("{} bytes", self.size_bytes)
    }
}
