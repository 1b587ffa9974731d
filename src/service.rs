//! Item service coordinating image storage and the item repository.
//!
//! The API layer and the CLI only talk to [`ItemService`]. Adding an item
//! writes the image first and records the row second; the two steps are not
//! coupled by a transaction.

use std::path::PathBuf;

use catalog_core::config::{Config, NamingScheme};
use catalog_core::{Error, ItemId, Result};
use catalog_db::models::{ItemRow, ItemSummary};
use catalog_db::ItemRepository;
use serde::Serialize;

use crate::images::{namer, ImageStore};

/// An uploaded image as received from the client.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Filename supplied by the client; only its extension survives.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Input for [`ItemService::add_item`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub upload: Upload,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedItem {
    pub id: ItemId,
    pub name: String,
    pub image_filename: String,
    pub message: String,
}

/// High-level item operations over an [`ImageStore`] and an [`ItemRepository`].
#[derive(Clone)]
pub struct ItemService {
    store: ImageStore,
    repo: ItemRepository,
    naming: NamingScheme,
}

impl ItemService {
    pub fn new(store: ImageStore, repo: ItemRepository, naming: NamingScheme) -> Self {
        Self {
            store,
            repo,
            naming,
        }
    }

    /// Build a service from the loaded config and an already-open repository.
    pub fn from_config(config: &Config, repo: ItemRepository) -> Self {
        Self::new(
            ImageStore::from_config(&config.images),
            repo,
            config.images.naming,
        )
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repo
    }

    /// Store the uploaded image under its derived name and record the item.
    ///
    /// If recording fails after the image was written, the file stays on
    /// disk and is reported at `warn`.
    pub fn add_item(&self, item: NewItem) -> Result<AddedItem> {
        let NewItem {
            name,
            category,
            upload,
        } = item;

        if name.trim().is_empty() {
            return Err(Error::Validation("item name must not be empty".into()));
        }

        tracing::info!("Receive item: {name}");

        let image_filename = namer::derive_with(self.naming, &upload.filename, &upload.bytes)?;
        let path = self.store.save(&image_filename, &upload.bytes)?;

        let id = match self.repo.insert(&name, category.as_str(), &image_filename) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(
                    "Item '{name}' was not recorded; image left at {}: {e}",
                    path.display()
                );
                return Err(e);
            }
        };

        Ok(AddedItem {
            id,
            message: format!("item received: {name}"),
            name,
            image_filename,
        })
    }

    /// Every item in insertion order.
    pub fn list_items(&self) -> Result<Vec<ItemRow>> {
        self.repo.list_all()
    }

    /// Items whose name equals `keyword` exactly.
    pub fn search(&self, keyword: &str) -> Result<Vec<ItemSummary>> {
        self.repo.find_by_name(keyword)
    }

    pub fn get_item(&self, id: ItemId) -> Result<ItemRow> {
        self.repo.find_by_id(id)
    }

    /// Path to serve for a stored image name; never fails.
    pub fn image_path(&self, filename: &str) -> PathBuf {
        self.store.resolve(filename)
    }
}
