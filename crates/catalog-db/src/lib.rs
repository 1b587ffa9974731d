//! catalog-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage with connection pooling,
//! an embedded schema, typed row models, query modules for items and
//! categories, and the [`ItemRepository`] that acquires one pooled
//! connection per operation.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod repository;

pub use repository::{CategoryRef, ItemRepository};
