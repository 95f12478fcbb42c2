pub mod domain_error;
pub mod listing_error;
pub mod selection_error;
pub mod settings_error;
pub mod summarizer_error;
