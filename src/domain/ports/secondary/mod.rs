pub mod drive_provider;
pub mod resource_picker;
pub mod summarizer;
pub mod translation_loader;
