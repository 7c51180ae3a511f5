use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

use crate::errors::AppError;

#[derive(Embed)]
#[folder = "assets/"]
struct Assets;

/// GET /assets/:file
pub async fn asset_handler(Path(file): Path<String>) -> Result<Response, AppError> {
    let asset = Assets::get(&file)
        .ok_or_else(|| AppError::NotFound(format!("Asset {file} not found")))?;
    let mime = mime_guess::from_path(&file).first_or_octet_stream();
    Ok((
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        asset.data.into_owned(),
    )
        .into_response())
}
