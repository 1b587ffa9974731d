//! Item insert, list, search, and lookup operations.

use catalog_core::{CategoryId, Error, ItemId, Result};
use rusqlite::Connection;

use crate::models::{Item, ItemRow, ItemSummary};

/// Select list for [`ItemRow`]; callers append their own WHERE clause.
const ROW_SELECT: &str = "SELECT items.name, categories.name, items.image_filename
    FROM items JOIN categories ON items.category_id = categories.id";

/// Insert a new item. The insert commits on its own.
pub fn insert_item(
    conn: &Connection,
    name: &str,
    category_id: CategoryId,
    image_filename: &str,
) -> Result<Item> {
    conn.execute(
        "INSERT INTO items (name, category_id, image_filename) VALUES (?1, ?2, ?3)",
        rusqlite::params![name, category_id.get(), image_filename],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(Item {
        id: ItemId::new(conn.last_insert_rowid()),
        name: name.to_string(),
        category_id,
        image_filename: image_filename.to_string(),
    })
}

/// List every item with its category name, in insertion order.
pub fn list_items(conn: &Connection) -> Result<Vec<ItemRow>> {
    let q = format!("{ROW_SELECT} ORDER BY items.id");
    let mut stmt = conn.prepare(&q).map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], ItemRow::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Items whose name equals `name` exactly (case-sensitive).
pub fn search_items_by_name(conn: &Connection, name: &str) -> Result<Vec<ItemSummary>> {
    let mut stmt = conn
        .prepare(
            "SELECT items.name, categories.name
             FROM items JOIN categories ON items.category_id = categories.id
             WHERE items.name = ?1
             ORDER BY items.id",
        )
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([name], ItemSummary::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Get an item by ID, joined with its category name.
///
/// Returns `Ok(None)` when no row matches and [`Error::MultipleResults`] when
/// more than one does.
pub fn get_item(conn: &Connection, id: ItemId) -> Result<Option<ItemRow>> {
    let q = format!("{ROW_SELECT} WHERE items.id = ?1");
    let mut stmt = conn.prepare(&q).map_err(|e| Error::database(e.to_string()))?;
    let mut rows = stmt
        .query_map([id.get()], ItemRow::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        n => Err(Error::multiple_results("item", id, n)),
    }
}
