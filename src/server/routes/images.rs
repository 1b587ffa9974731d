//! Image serving route handler.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use catalog_core::Error;
use tokio_util::io::ReaderStream;

use crate::server::context::AppContext;
use crate::server::error::AppError;

/// GET /image/{filename}
///
/// Streams the stored image, or the default image when the name is not on
/// disk. Only `.jpg` names are served.
pub async fn get_image(
    State(ctx): State<AppContext>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !filename.ends_with(".jpg") {
        return Err(Error::Validation("Image path does not end with .jpg".into()).into());
    }

    let path = ctx.service.image_path(&filename);
    let file = tokio::fs::File::open(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::not_found("image", &filename)
        } else {
            Error::from(e)
        }
    })?;

    let body = Body::from_stream(ReaderStream::new(file));
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "image/jpeg")], body))
}
