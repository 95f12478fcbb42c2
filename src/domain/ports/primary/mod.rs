pub mod directory_listing_use_case;
pub mod language_use_case;
pub mod resource_selection_use_case;
