pub mod directory_entry;
pub mod drive;
pub mod language;
pub mod resource;
pub mod summary;
