pub mod text_analytics_client;
