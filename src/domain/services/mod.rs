pub mod directory_listing_service;
pub mod directory_scanner;
pub mod language_service;
pub mod resource_selection_service;
