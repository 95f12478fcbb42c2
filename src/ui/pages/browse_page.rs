use crate::domain::entities::directory_entry::{DirectoryEntry, FileMetadata};
use crate::domain::entities::resource::ResourceKind;
use crate::domain::entities::summary::Summary;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::errors::listing_error::DirectoryListingError;
use crate::domain::ports::primary::directory_listing_use_case::DirectoryListingUseCase;
use crate::domain::ports::primary::resource_selection_use_case::ResourceSelectionUseCase;
use crate::tr;
use crate::ui::components::file_table::FileTable;
use crate::ui::components::listing_status::{listing_status, ListingState};
use crate::ui::components::resource_bar::ResourceBar;
use crate::ui::messages::browse_message::BrowseMessage;
use crate::utils::dialogs::{popup_error, popup_warning};
use iced::widget::column;
use iced::{Element, Task};
use std::collections::{HashMap, VecDeque};
use std::convert::identity;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::{error, info};

pub struct BrowsePage {
    listing_use_case: Arc<dyn DirectoryListingUseCase>,
    selection_use_case: Arc<dyn ResourceSelectionUseCase>,
    resource_bar: ResourceBar,
    file_table: FileTable,
    state: ListingState,
    is_resolving: bool,
    // Bumped on every new listing so results of a superseded one are dropped.
    generation: u64,
    pending: VecDeque<FileMetadata>,
}

impl BrowsePage {
    pub fn new(
        listing_use_case: Arc<dyn DirectoryListingUseCase>,
        selection_use_case: Arc<dyn ResourceSelectionUseCase>,
    ) -> (Self, Task<BrowseMessage>) {
        let drives_source = selection_use_case.clone();
        let page = Self {
            listing_use_case,
            selection_use_case,
            resource_bar: ResourceBar::default(),
            file_table: FileTable::default(),
            state: ListingState::Idle,
            is_resolving: false,
            generation: 0,
            pending: VecDeque::new(),
        };
        let task = Task::perform(
            async move {
                spawn_blocking(move || drives_source.available_drives())
                    .await
                    .unwrap_or_default()
            },
            BrowseMessage::DrivesFetched,
        );
        (page, task)
    }

    pub fn title(translations: &HashMap<String, String>) -> String {
        tr!(translations, "app_title")
    }

    pub fn rows(&self) -> &[DirectoryEntry] {
        self.file_table.rows()
    }

    pub fn state(&self) -> ListingState {
        self.state
    }

    pub fn view(&'_ self, translations: &HashMap<String, String>) -> Element<'_, BrowseMessage> {
        column![
            self.resource_bar.view(translations, !self.is_resolving),
            listing_status(&self.state, translations),
            self.file_table.view(translations),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    pub fn update(
        &mut self,
        message: BrowseMessage,
        translations: &HashMap<String, String>,
    ) -> Task<BrowseMessage> {
        match message {
            BrowseMessage::ResourceKindSelected(kind) => {
                self.resource_bar.select_kind(kind);
                Task::none()
            }
            BrowseMessage::DrivesFetched(drives) => {
                self.resource_bar.set_drives(drives);
                Task::none()
            }
            BrowseMessage::DriveSelected(drive) => {
                self.resource_bar.selected_drive = Some(drive);
                Task::none()
            }
            BrowseMessage::PathChanged(path) => {
                self.resource_bar.path = path;
                Task::none()
            }
            BrowseMessage::SelectPressed => self.select_resource(translations),
            BrowseMessage::SelectionRejected(warning) => {
                self.is_resolving = false;
                popup_warning(warning);
                Task::none()
            }
            BrowseMessage::ResourceResolved(resolved) => {
                self.is_resolving = false;
                match resolved {
                    Some(resource) => {
                        self.resource_bar.path = resource.display_path.display().to_string();
                        self.start_listing(resource.directory)
                    }
                    None => Task::none(),
                }
            }
            BrowseMessage::DirectoryScanned { generation, result } => {
                if generation != self.generation {
                    return Task::none();
                }
                match result {
                    Ok(files) => {
                        self.state = ListingState::Summarizing {
                            done: 0,
                            total: files.len(),
                        };
                        self.pending = files.into();
                        self.summarize_next()
                    }
                    Err(error) => {
                        self.state = ListingState::Idle;
                        popup_error(error);
                        Task::none()
                    }
                }
            }
            BrowseMessage::FileSummarized { generation, entry } => {
                if generation != self.generation {
                    return Task::none();
                }
                self.file_table.push(entry);
                if let ListingState::Summarizing { done, .. } = &mut self.state {
                    *done += 1;
                }
                self.summarize_next()
            }
        }
    }

    fn select_resource(&mut self, translations: &HashMap<String, String>) -> Task<BrowseMessage> {
        if self.is_resolving {
            return Task::none();
        }
        self.is_resolving = true;

        let selection_use_case = self.selection_use_case.clone();
        let kind = self.resource_bar.kind;
        let drive = self.resource_bar.selected_drive.clone();
        let dialog_title = match kind {
            Some(ResourceKind::File) => tr!(translations, "file_dialog_title"),
            _ => tr!(translations, "folder_dialog_title"),
        };

        Task::perform(
            async move {
                let task = spawn_blocking(move || {
                    selection_use_case.resolve(kind, drive.as_ref(), &dialog_title)
                });
                match task.await {
                    Ok(Ok(resolved)) => BrowseMessage::ResourceResolved(resolved),
                    Ok(Err(error)) => BrowseMessage::SelectionRejected(error.to_string()),
                    Err(error) => {
                        error!(%error, "resource selection task failed");
                        BrowseMessage::ResourceResolved(None)
                    }
                }
            },
            identity,
        )
    }

    /// Clears the table and scans `directory`; rows follow one summary at a time.
    pub fn start_listing(&mut self, directory: PathBuf) -> Task<BrowseMessage> {
        self.generation += 1;
        self.file_table.clear();
        self.pending.clear();
        self.state = ListingState::Scanning;
        info!(directory = %directory.display(), "listing directory");

        let generation = self.generation;
        let listing_use_case = self.listing_use_case.clone();
        Task::perform(
            async move {
                let task = spawn_blocking(move || listing_use_case.scan_directory(&directory));
                match task.await {
                    Ok(result) => result.map_err(|error| error.to_string()),
                    Err(error) => {
                        let error = DomainError::from(DirectoryListingError::from(error));
                        Err(error.to_string())
                    }
                }
            },
            move |result| BrowseMessage::DirectoryScanned { generation, result },
        )
    }

    fn summarize_next(&mut self) -> Task<BrowseMessage> {
        let Some(file) = self.pending.pop_front() else {
            self.state = ListingState::Completed {
                files_listed: self.file_table.rows().len(),
            };
            return Task::none();
        };

        let generation = self.generation;
        let listing_use_case = self.listing_use_case.clone();
        Task::perform(
            async move {
                let fallback = file.clone();
                let task = spawn_blocking(move || listing_use_case.summarize(&file));
                task.await.unwrap_or_else(|error| {
                    let summary = Summary::TransportFailure(error.to_string());
                    DirectoryEntry::new(&fallback, &summary)
                })
            },
            move |entry| BrowseMessage::FileSummarized { generation, entry },
        )
    }
}
