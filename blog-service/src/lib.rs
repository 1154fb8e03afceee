/// Blog service library.
///
/// A small blogging platform: users author text posts, optionally filed
/// under a named group; other users comment; posts are listed newest-first
/// with pagination on the index, group and profile endpoints.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: entity and joined-record structs
/// - `services`: business logic layer
/// - `db`: repository functions over the connection pool
/// - `pagination`: page-window arithmetic for ordered listings
/// - `middleware`: bearer-token validation and the authenticated-caller extractor
/// - `routes`: the route table, shared with the test harness
/// - `error`: error types and HTTP conversion
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
