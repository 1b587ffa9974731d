//! Item catalog service.
//!
//! Items (name, category, image) are stored in SQLite through
//! [`catalog_db::ItemRepository`]; uploaded images are renamed by
//! [`images::namer`] and written under one directory by
//! [`images::ImageStore`]. [`service::ItemService`] ties the two together and
//! [`server`] exposes it over HTTP.

pub mod images;
pub mod server;
pub mod service;
