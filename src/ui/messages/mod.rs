pub mod app_message;
pub mod browse_message;
