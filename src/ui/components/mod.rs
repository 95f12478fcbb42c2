pub mod file_table;
pub mod listing_status;
pub mod resource_bar;
