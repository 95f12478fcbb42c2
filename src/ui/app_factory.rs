use crate::config::settings::Settings;
use crate::domain::errors::summarizer_error::SummarizerError;
use crate::domain::ports::primary::directory_listing_use_case::DirectoryListingUseCase;
use crate::domain::ports::primary::language_use_case::LanguageUseCase;
use crate::domain::ports::primary::resource_selection_use_case::ResourceSelectionUseCase;
use crate::domain::services::directory_listing_service::DirectoryListingService;
use crate::domain::services::language_service::LanguageService;
use crate::domain::services::resource_selection_service::ResourceSelectionService;
use crate::infrastructure::filesystem::native_resource_picker::NativeResourcePicker;
use crate::infrastructure::filesystem::system_drives::SystemDrives;
use crate::infrastructure::i18n::json_translation_loader::JsonTranslationLoader;
use crate::infrastructure::summarizer::text_analytics_client::TextAnalyticsClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct ExplorerAppService {
    pub settings: Settings,
    pub listing_use_case: Arc<dyn DirectoryListingUseCase>,
    pub selection_use_case: Arc<dyn ResourceSelectionUseCase>,
    pub language_use_case: Arc<dyn LanguageUseCase>,
}

impl ExplorerAppService {
    /// Wires the services with their native adapters.
    ///
    /// # Errors
    ///
    /// Returns a [`SummarizerError`] if the HTTP client for the summary service
    /// cannot be built.
    pub fn create(settings: Settings) -> Result<Self, SummarizerError> {
        let summarizer = Arc::new(TextAnalyticsClient::new(&settings.azure)?);
        let picker = Arc::new(NativeResourcePicker);
        let drives = Arc::new(SystemDrives);
        let translation_loader = Arc::new(JsonTranslationLoader);

        Ok(Self {
            settings,
            listing_use_case: Arc::new(DirectoryListingService::new(summarizer)),
            selection_use_case: Arc::new(ResourceSelectionService::new(picker, drives)),
            language_use_case: Arc::new(LanguageService::new(translation_loader)),
        })
    }
}
