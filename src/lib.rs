pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod utils;
