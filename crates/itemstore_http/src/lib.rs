//! HTTP surface for the item store.
//!
//! # Responsibility
//! - Map the item CRUD use-cases onto JSON endpoints.
//! - Acquire one storage handle per request and release it on every exit path.
//!
//! # Endpoints
//!
//! - `GET /` - liveness probe
//! - `POST /items` - create
//! - `GET|PUT|DELETE /items/:item_id` - read, update, delete

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use error::{ApiError, ApiResult, ServerError};
pub use routes::{item_routes, AppState};
pub use server::HttpServer;
