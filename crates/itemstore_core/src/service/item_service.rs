//! Item use-case service.
//!
//! # Responsibility
//! - Provide the create/read/update/delete entry points used by handlers.
//! - Apply partial-update merge rules before persisting.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Missing ids surface as `RepoError::NotFound` and cause no write.

use crate::model::item::{Item, ItemId, ItemPatch, NewItem};
use crate::repo::item_repo::{ItemRepository, RepoError, RepoResult};

/// Use-case service wrapper for item CRUD operations.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new item and returns it with its assigned id.
    pub fn create_item(&self, item: &NewItem) -> RepoResult<Item> {
        self.repo.create_item(item)
    }

    /// Gets one item by id.
    pub fn get_item(&self, id: ItemId) -> RepoResult<Item> {
        self.repo.get_item(id)?.ok_or(RepoError::NotFound(id))
    }

    /// Merges `patch` into the stored item and writes the result.
    ///
    /// Omitted fields keep their stored value; an empty patch rewrites the
    /// row unchanged.
    pub fn update_item(&self, id: ItemId, patch: &ItemPatch) -> RepoResult<Item> {
        let mut item = self.get_item(id)?;
        item.apply(patch);
        self.repo.update_item(&item)?;
        Ok(item)
    }

    /// Removes an item and returns the record as it was before removal.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<Item> {
        self.repo.delete_item(id)
    }
}
