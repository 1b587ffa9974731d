//! Item repository over the connection pool.
//!
//! Every operation checks out one pooled connection for its own duration. The
//! guard goes back to the pool when it is dropped, on success and on every
//! error path, so no connection or lock is held across requests.

use catalog_core::{CategoryId, Error, ItemId, Result};

use crate::models::{Category, ItemRow, ItemSummary};
use crate::pool::{get_conn, DbPool};
use crate::queries::{categories, items};

/// Category given when inserting an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    /// An existing category row.
    Id(CategoryId),
    /// A category name; created on first use.
    Name(String),
}

impl From<CategoryId> for CategoryRef {
    fn from(id: CategoryId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for CategoryRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for CategoryRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// CRUD-lite access to items and their categories.
#[derive(Clone)]
pub struct ItemRepository {
    pool: DbPool,
}

impl ItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// All items joined with their category name, in insertion order.
    pub fn list_all(&self) -> Result<Vec<ItemRow>> {
        let conn = get_conn(&self.pool)?;
        items::list_items(&conn)
    }

    /// Items whose name matches exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Result<Vec<ItemSummary>> {
        let conn = get_conn(&self.pool)?;
        items::search_items_by_name(&conn, name)
    }

    /// A single item by id.
    ///
    /// Fails with [`Error::NotFound`] when no row matches.
    pub fn find_by_id(&self, id: ItemId) -> Result<ItemRow> {
        let conn = get_conn(&self.pool)?;
        items::get_item(&conn, id)?.ok_or_else(|| Error::not_found("item", id))
    }

    /// Append a new item and return its id.
    ///
    /// A [`CategoryRef::Name`] that does not exist yet is created first. A
    /// [`CategoryRef::Id`] must refer to an existing category.
    pub fn insert(
        &self,
        name: &str,
        category: impl Into<CategoryRef>,
        image_filename: &str,
    ) -> Result<ItemId> {
        let conn = get_conn(&self.pool)?;

        let category_id = match category.into() {
            CategoryRef::Id(id) => {
                categories::get_category(&conn, id)?
                    .ok_or_else(|| Error::not_found("category", id))?
                    .id
            }
            CategoryRef::Name(category_name) => {
                categories::find_or_create_category(&conn, &category_name)?.id
            }
        };

        let item = items::insert_item(&conn, name, category_id, image_filename)?;
        tracing::debug!(id = %item.id, name = %item.name, "Inserted item");
        Ok(item.id)
    }

    /// All categories ordered by id.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = get_conn(&self.pool)?;
        categories::list_categories(&conn)
    }
}
