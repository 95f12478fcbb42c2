pub mod browse_page;
