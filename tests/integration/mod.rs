//! Integration tests with mock HTTP server

pub mod credentials;
pub mod mock_server;
pub mod rest_client;
pub mod synthesis;
