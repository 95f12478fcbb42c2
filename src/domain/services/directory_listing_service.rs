use crate::domain::entities::directory_entry::{DirectoryEntry, FileMetadata};
use crate::domain::entities::summary::Summary;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::directory_listing_use_case::DirectoryListingUseCase;
use crate::domain::ports::secondary::summarizer::Summarizer;
use crate::domain::services::directory_scanner;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct DirectoryListingService {
    summarizer: Arc<dyn Summarizer>,
}

impl DirectoryListingService {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    fn summary_for(&self, path: &Path) -> Summary {
        match fs::read(path) {
            Ok(bytes) => self.summarizer.summarize(&decode_ignoring_invalid(&bytes)),
            Err(error) => Summary::TransportFailure(error.to_string()),
        }
    }
}

impl DirectoryListingUseCase for DirectoryListingService {
    fn scan_directory(&self, directory: &Path) -> Result<Vec<FileMetadata>, DomainError> {
        let files = directory_scanner::scan_directory(directory)?;
        info!(directory = %directory.display(), files = files.len(), "directory scanned");
        Ok(files)
    }

    fn summarize(&self, file: &FileMetadata) -> DirectoryEntry {
        let summary = self.summary_for(&file.path);
        if summary.is_success() {
            debug!(file = %file.path.display(), "summary received");
        } else {
            warn!(file = %file.path.display(), %summary, "summary unavailable");
        }
        DirectoryEntry::new(file, &summary)
    }
}

/// Decodes UTF-8, dropping invalid byte sequences instead of replacing them.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
