//! quizdb - REST service for quiz questions and categories
//!
//! Questions and categories live in two MongoDB collections and are exposed
//! over a JSON HTTP API with create, read, update, delete and filtered
//! listing.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod store;
