//! Row models for the catalog tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row` selected with the column order documented on it.

use catalog_core::{CategoryId, ItemId};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Build from a row selected as: id, name
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: CategoryId::new(row.get(0)?),
            name: row.get(1)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// An item as stored, with its category reference unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category_id: CategoryId,
    pub image_filename: String,
}

/// An item joined with its category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub category: String,
    pub image_filename: String,
}

impl ItemRow {
    /// Build from a row selected as: items.name, categories.name, items.image_filename
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            category: row.get(1)?,
            image_filename: row.get(2)?,
        })
    }
}

/// Search result: name and category only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub name: String,
    pub category: String,
}

impl ItemSummary {
    /// Build from a row selected as: items.name, categories.name
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            category: row.get(1)?,
        })
    }
}
