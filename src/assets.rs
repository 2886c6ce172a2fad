use std::{collections::HashMap, sync::LazyLock};

use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use http::{header, StatusCode};

use crate::site::{fingerprinted_name, Content};

/// Fingerprinted public name -> embedded path, built once from the embedded content.
pub static GLOBAL_ASSET_NAMES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    Content::iter()
        .filter_map(|path| {
            let file = Content::get(&path)?;
            let public = fingerprinted_name(&path, &file.metadata.sha256_hash());
            Some((public, path.into_owned()))
        })
        .collect()
});

pub fn resolve_asset(name: &str) -> Option<String> {
    GLOBAL_ASSET_NAMES.get(name).cloned()
}

pub fn content_type(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "svg" => "image/svg+xml",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

pub async fn static_asset(Path(name): Path<String>) -> Response {
    let asset = resolve_asset(&name).and_then(|path| Content::get(&path).map(|file| (path, file)));
    let Some((path, file)) = asset else {
        tracing::debug!(%name, "static asset not found");
        return StatusCode::NOT_FOUND.into_response();
    };
    (
        [
            (header::CONTENT_TYPE, content_type(&path)),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        file.data.into_owned(),
    )
        .into_response()
}
