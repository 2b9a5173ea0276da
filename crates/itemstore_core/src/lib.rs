//! Core domain logic for the item store.
//! This crate is the single source of truth for item invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemPatch, ItemValidationError, NewItem, NAME_MAX_CHARS};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};
pub use service::item_service::ItemService;

/// Fixed liveness message returned by the root endpoint.
pub fn liveness_message() -> &'static str {
    "Server is running"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
