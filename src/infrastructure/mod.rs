pub mod filesystem;
pub mod i18n;
pub mod summarizer;
