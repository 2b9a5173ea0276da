//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `items` table keyed by `ItemId`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate before SQL mutations.
//! - Each call is one autocommitted statement; no transaction spans calls.

use crate::db::DbError;
use crate::model::item::{Item, ItemId, ItemValidationError, NewItem};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ITEM_COLUMNS: &str = "id, name, description";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(ItemId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for item CRUD operations.
pub trait ItemRepository {
    fn create_item(&self, item: &NewItem) -> RepoResult<Item>;
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    fn update_item(&self, item: &Item) -> RepoResult<()>;
    fn delete_item(&self, id: ItemId) -> RepoResult<Item>;
}

/// SQLite-backed item repository borrowing one storage handle.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &NewItem) -> RepoResult<Item> {
        item.validate()?;

        let created = self.conn.query_row(
            &format!(
                "INSERT INTO items (name, description)
                 VALUES (?1, ?2)
                 RETURNING {ITEM_COLUMNS};"
            ),
            params![item.name.as_str(), item.description.as_deref()],
            parse_item_row,
        )?;

        Ok(created)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let item = self
            .conn
            .query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1;"),
                [id],
                parse_item_row,
            )
            .optional()?;

        Ok(item)
    }

    fn update_item(&self, item: &Item) -> RepoResult<()> {
        item.validate()?;

        let changed = self.conn.execute(
            "UPDATE items
             SET
                name = ?1,
                description = ?2
             WHERE id = ?3;",
            params![item.name.as_str(), item.description.as_deref(), item.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(item.id));
        }

        Ok(())
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<Item> {
        self.conn
            .query_row(
                &format!("DELETE FROM items WHERE id = ?1 RETURNING {ITEM_COLUMNS};"),
                [id],
                parse_item_row,
            )
            .optional()?
            .ok_or(RepoError::NotFound(id))
    }
}

fn parse_item_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
