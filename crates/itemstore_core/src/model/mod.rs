//! Domain model for stored items.
//!
//! # Responsibility
//! - Define the canonical record shared by storage and HTTP layers.
//! - Define create/update payload shapes and their merge rules.
//!
//! # Invariants
//! - Every persisted item is identified by a storage-assigned `ItemId`.
//! - Deletion is permanent; there are no tombstones.

pub mod item;
