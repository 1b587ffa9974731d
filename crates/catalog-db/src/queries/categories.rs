//! Category lookups and find-or-create.

use catalog_core::{CategoryId, Error, Result};
use rusqlite::Connection;

use crate::models::Category;

/// Create a new category.
pub fn create_category(conn: &Connection, name: &str) -> Result<Category> {
    conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(Category {
        id: CategoryId::new(conn.last_insert_rowid()),
        name: name.to_string(),
    })
}

/// Get a category by ID.
pub fn get_category(conn: &Connection, id: CategoryId) -> Result<Option<Category>> {
    let result = conn.query_row(
        "SELECT id, name FROM categories WHERE id = ?1",
        [id.get()],
        Category::from_row,
    );
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Find a category by its exact name.
pub fn find_category_by_name(conn: &Connection, name: &str) -> Result<Option<Category>> {
    let result = conn.query_row(
        "SELECT id, name FROM categories WHERE name = ?1",
        [name],
        Category::from_row,
    );
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Return the category with this name, creating it first if needed.
pub fn find_or_create_category(conn: &Connection, name: &str) -> Result<Category> {
    if let Some(existing) = find_category_by_name(conn, name)? {
        return Ok(existing);
    }
    tracing::debug!("Creating category '{name}'");
    create_category(conn, name)
}

/// List all categories ordered by ID.
pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM categories ORDER BY id")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Category::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn create_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let cat = create_category(&conn, "fashion").unwrap();
        let fetched = get_category(&conn, cat.id).unwrap().unwrap();
        assert_eq!(fetched, cat);
        assert!(get_category(&conn, CategoryId::new(999)).unwrap().is_none());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        create_category(&conn, "fashion").unwrap();
        let err = create_category(&conn, "fashion").unwrap_err();
        assert!(matches!(err, Error::Database { .. }));
    }

    #[test]
    fn find_or_create_reuses_existing() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let first = find_or_create_category(&conn, "toys").unwrap();
        let second = find_or_create_category(&conn, "toys").unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(list_categories(&conn).unwrap().len(), 1);
    }

    #[test]
    fn lookup_by_name_is_case_sensitive() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        create_category(&conn, "Books").unwrap();
        assert!(find_category_by_name(&conn, "books").unwrap().is_none());
        assert!(find_category_by_name(&conn, "Books").unwrap().is_some());
    }
}
