//! # quizdb HTTP Server Module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/questions`, `/questions/{id}` - Question CRUD and listing
//! - `/categories`, `/categories/{id}` - Category CRUD

pub mod config;
pub mod health;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
