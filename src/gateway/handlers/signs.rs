//! Sign API handlers
//!
//! Every per-sign handler starts with `resolve_sign`, which validates the
//! name and applies the visibility check before anything else runs.

use std::collections::HashMap;
use std::io;
use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use super::super::error::{ApiError, ApiErrorCode};
use super::super::state::AppState;
use crate::auth::AuthState;
use crate::signs::{ResourceName, SignHandle, SignName};

type PathParams = HashMap<String, String>;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";
const OCTET_STREAM: &str = "application/octet-stream";

/// Resolve `{name}` for this request, or the single collapsed rejection.
fn resolve_sign<'s>(
    state: &'s AppState,
    params: &PathParams,
    auth: AuthState,
) -> Result<SignHandle<'s>, ApiError> {
    let raw = params
        .get("name")
        .ok_or_else(|| ApiError::from_code(ApiErrorCode::MissingSignName))?;
    state.resolver.resolve(raw, auth).map_err(ApiError::sign)
}

fn sub_param<'p>(params: &'p PathParams, key: &str) -> Result<&'p str, ApiError> {
    params
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ApiError::from_code(ApiErrorCode::InvalidSignName))
}

/// Content type for an asset, by extension.
pub fn asset_content_type(path: &FsPath) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => JSON,
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("glb") => "model/gltf-binary",
        Some("gltf") => "model/gltf+json",
        Some("txt") => TEXT,
        Some("bin") => OCTET_STREAM,
        _ => OCTET_STREAM,
    }
}

async fn send_file(path: &FsPath, content_type: &'static str) -> Result<Response, ApiError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ApiError::from_code(ApiErrorCode::NotFound))
        }
        Err(e) => Err(ApiError::internal("Failed to read sign file", e)),
    }
}

/// List visible signs
///
/// GET /api/signs.json
#[utoipa::path(
    get,
    path = "/api/signs.json",
    responses(
        (status = 200, description = "Names of the signs visible to this session", body = Vec<String>),
        (status = 500, description = "Signs root unreadable")
    ),
    tag = "Signs"
)]
pub async fn list_signs(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, ApiError> {
    let auth = state.auth_state(&headers);
    let signs = state
        .catalog
        .list(auth)
        .map_err(|e| ApiError::internal("Sign listing failed", e))?;
    Ok(Json(signs.into_iter().map(SignName::into_string).collect()))
}

/// Scene definition of a sign
///
/// GET /api/signs/{name}/scene.json
#[utoipa::path(
    get,
    path = "/api/signs/{name}/scene.json",
    params(("name" = String, Path, description = "Sign name")),
    responses(
        (status = 200, description = "Scene definition"),
        (status = 400, description = "invalid sign name")
    ),
    tag = "Signs"
)]
pub async fn get_scene(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(params): Path<PathParams>,
) -> Result<Response, ApiError> {
    let auth = state.auth_state(&headers);
    let scene = resolve_sign(&state, &params, auth)?.scene_definition_path();
    send_file(&scene, JSON).await
}

/// Asset file of a sign
///
/// GET /api/signs/{name}/assets/{asset}
#[utoipa::path(
    get,
    path = "/api/signs/{name}/assets/{asset}",
    params(
        ("name" = String, Path, description = "Sign name"),
        ("asset" = String, Path, description = "Asset file name")
    ),
    responses(
        (status = 200, description = "Asset bytes"),
        (status = 400, description = "invalid sign name"),
        (status = 404, description = "No such asset")
    ),
    tag = "Signs"
)]
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(params): Path<PathParams>,
) -> Result<Response, ApiError> {
    let auth = state.auth_state(&headers);
    let path = {
        let sign = resolve_sign(&state, &params, auth)?;
        sign.resolve_asset(sub_param(&params, "asset")?)
            .map_err(ApiError::resource)?
    };
    send_file(&path, asset_content_type(&path)).await
}

/// Program names of a sign
///
/// GET /api/signs/{name}/pgms.json
#[utoipa::path(
    get,
    path = "/api/signs/{name}/pgms.json",
    params(("name" = String, Path, description = "Sign name")),
    responses(
        (status = 200, description = "Program file names", body = Vec<String>),
        (status = 400, description = "invalid sign name")
    ),
    tag = "Signs"
)]
pub async fn list_programs(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(params): Path<PathParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let auth = state.auth_state(&headers);
    let sign = resolve_sign(&state, &params, auth)?;
    let programs = sign
        .list_programs()
        .map_err(ApiError::resource)?
        .map(|name: ResourceName| name.as_str().to_string())
        .collect();
    Ok(Json(programs))
}

/// Program file of a sign, as plain text
///
/// GET /api/signs/{name}/pgms/{pgm}
#[utoipa::path(
    get,
    path = "/api/signs/{name}/pgms/{pgm}",
    params(
        ("name" = String, Path, description = "Sign name"),
        ("pgm" = String, Path, description = "Program file name")
    ),
    responses(
        (status = 200, description = "Program source"),
        (status = 400, description = "invalid sign name"),
        (status = 404, description = "No such program")
    ),
    tag = "Signs"
)]
pub async fn get_program(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(params): Path<PathParams>,
) -> Result<Response, ApiError> {
    let auth = state.auth_state(&headers);
    let path = {
        let sign = resolve_sign(&state, &params, auth)?;
        sign.resolve_program(sub_param(&params, "pgm")?)
            .map_err(ApiError::resource)?
    };
    send_file(&path, TEXT).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_content_types() {
        assert_eq!(asset_content_type(FsPath::new("a/logo.PNG")), "image/png");
        assert_eq!(asset_content_type(FsPath::new("mesh.glb")), "model/gltf-binary");
        assert_eq!(asset_content_type(FsPath::new("data.json")), JSON);
        assert_eq!(asset_content_type(FsPath::new("weights.BIN")), OCTET_STREAM);
        assert_eq!(
            asset_content_type(FsPath::new("noext")),
            "application/octet-stream"
        );
        assert_eq!(
            asset_content_type(FsPath::new("weird.xyz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_missing_sub_param() {
        let params = PathParams::new();
        assert_eq!(
            sub_param(&params, "asset").unwrap_err().code,
            ApiErrorCode::InvalidSignName
        );
    }
}
