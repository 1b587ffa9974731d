//! Route handlers for the HTTP API.

pub mod images;
pub mod items;
pub mod root;
