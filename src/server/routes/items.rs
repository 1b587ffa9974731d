//! Item route handlers.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::{Error, ItemId};
use catalog_db::models::{ItemRow, ItemSummary};
use serde::{Deserialize, Serialize};

use crate::server::context::AppContext;
use crate::server::error::AppError;
use crate::service::{NewItem, Upload};

/// Wrapper for list responses.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

/// Query parameters for search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

/// Response body for a successful add.
#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub message: String,
    pub id: ItemId,
    pub image_filename: String,
}

/// GET /items
pub async fn list_items(
    State(ctx): State<AppContext>,
) -> Result<Json<ItemsResponse<ItemRow>>, AppError> {
    let items = ctx.service.list_items()?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /search?keyword=...
pub async fn search_items(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ItemsResponse<ItemSummary>>, AppError> {
    let keyword = params
        .keyword
        .ok_or_else(|| Error::Validation("missing query parameter 'keyword'".into()))?;
    let items = ctx.service.search(&keyword)?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /items/{id}
pub async fn get_item(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<ItemRow>, AppError> {
    let id: ItemId = id
        .parse()
        .map_err(|_| Error::Validation(format!("Invalid item ID: {id}")))?;
    Ok(Json(ctx.service.get_item(id)?))
}

/// POST /items
///
/// Multipart form with text fields `name` and `category` and a file part
/// `image`.
pub async fn add_item(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> Result<Json<AddItemResponse>, AppError> {
    let mut name = None;
    let mut category = None;
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = Some(field.text().await.map_err(bad_form)?),
            "category" => category = Some(field.text().await.map_err(bad_form)?),
            "image" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| Error::Validation("image part has no filename".into()))?;
                let bytes = field.bytes().await.map_err(bad_form)?.to_vec();
                upload = Some(Upload { filename, bytes });
            }
            other => tracing::debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    let item = NewItem {
        name: name.ok_or_else(|| missing_field("name"))?,
        category: category.ok_or_else(|| missing_field("category"))?,
        upload: upload.ok_or_else(|| missing_field("image"))?,
    };

    let service = ctx.service.clone();
    let added = tokio::task::spawn_blocking(move || service.add_item(item))
        .await
        .map_err(|e| Error::Internal(format!("spawn_blocking join error: {e}")))??;
    Ok(Json(AddItemResponse {
        message: added.message,
        id: added.id,
        image_filename: added.image_filename,
    }))
}

fn bad_form(e: MultipartError) -> Error {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(e.body_text())
    } else {
        Error::Validation(format!("malformed multipart body: {}", e.body_text()))
    }
}

fn missing_field(field: &str) -> Error {
    Error::Validation(format!("missing form field '{field}'"))
}
